use crate::constants::*;

/// Slide-in animation played whenever a carousel changes page.
///
/// The incoming page moves from `start_offset` to rest while fading in.
#[derive(Debug, Clone)]
pub struct PageTransition {
    duration: f32,
    start_offset: f32,

    offset_x: f32,
    opacity: f32,

    animation_timer: f32,
    pub is_animating: bool,
}

impl PageTransition {
    pub fn new(duration: f32) -> Self {
        Self {
            duration,
            start_offset: TRANSITION_OFFSET,
            offset_x: 0.0,
            opacity: 1.0,
            animation_timer: 0.0,
            is_animating: false,
        }
    }

    /// `direction` is +1.0 for a forward page change (enter from the right) and -1.0 backwards.
    pub fn start(&mut self, direction: f32) {
        self.start_offset = TRANSITION_OFFSET * direction.signum();
        self.offset_x = self.start_offset;
        self.opacity = 0.0;
        self.animation_timer = 0.0;
        self.is_animating = true;
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }
        self.animation_timer += dt;
        let t = ease_in_out(self.progress());

        self.offset_x = lerp(self.start_offset, 0.0, t);
        self.opacity = lerp(0.0, 1.0, t);

        if self.animation_timer >= self.duration {
            self.is_animating = false;
            self.offset_x = 0.0;
            self.opacity = 1.0;
        }
    }

    pub fn offset_x(&self) -> f32 {
        self.offset_x
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.animation_timer / self.duration).min(1.0)
    }
}

pub fn lerp(start: f32, end: f32, t: f32) -> f32 {
    start + (end - start) * t
}

// easeInOutCubic
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
