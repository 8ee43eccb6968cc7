//! Threshold-driven visibility toggles.

use crate::constants::*;

/// Flips to visible once enough of a target is on screen.
///
/// With `once` set the trigger latches: later observations never hide it again,
/// so a downstream animation runs exactly one time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InViewTrigger {
    threshold: f32,
    once: bool,
    in_view: bool,
}

impl InViewTrigger {
    pub fn new(threshold: f32, once: bool) -> Self {
        Self { threshold: threshold.clamp(0.0, 1.0), once, in_view: false }
    }

    /// Feeds the currently visible fraction (0.0 to 1.0) of the target.
    /// Returns true only on the observation that made the target visible.
    pub fn observe(&mut self, visible_ratio: f32) -> bool {
        let visible = visible_ratio >= self.threshold && visible_ratio > 0.0;
        if self.once && self.in_view {
            return false;
        }
        let became_visible = visible && !self.in_view;
        self.in_view = visible;
        became_visible
    }

    pub fn in_view(&self) -> bool {
        self.in_view
    }
}

impl Default for InViewTrigger {
    fn default() -> Self {
        Self::new(IN_VIEW_THRESHOLD, true)
    }
}

/// Shows the floating contact and scroll-to-top buttons past a scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollThreshold {
    threshold: f32,
    visible: bool,
}

impl ScrollThreshold {
    pub fn new(threshold: f32) -> Self {
        Self { threshold, visible: false }
    }

    /// Returns true when visibility changed.
    pub fn on_scroll(&mut self, offset: f32) -> bool {
        let visible = offset > self.threshold;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for ScrollThreshold {
    fn default() -> Self {
        Self::new(SCROLL_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_trigger_latches() {
        let mut trigger = InViewTrigger::default();
        assert!(!trigger.observe(0.1));
        assert!(trigger.observe(0.3));
        assert!(!trigger.observe(0.9));
        assert!(!trigger.observe(0.0));
        assert!(trigger.in_view());
    }

    #[test]
    fn repeating_trigger_follows_the_ratio() {
        let mut trigger = InViewTrigger::new(0.5, false);
        assert!(trigger.observe(0.6));
        assert!(!trigger.observe(0.2));
        assert!(!trigger.in_view());
        assert!(trigger.observe(0.7));
    }

    #[test]
    fn zero_threshold_still_needs_something_visible() {
        let mut trigger = InViewTrigger::new(0.0, true);
        assert!(!trigger.observe(0.0));
        assert!(trigger.observe(0.01));
    }

    #[test]
    fn scroll_threshold_is_strictly_greater() {
        let mut buttons = ScrollThreshold::default();
        assert!(!buttons.on_scroll(300.0));
        assert!(!buttons.is_visible());
        assert!(buttons.on_scroll(301.0));
        assert!(!buttons.on_scroll(800.0));
        assert!(buttons.on_scroll(0.0));
        assert!(!buttons.is_visible());
    }
}
