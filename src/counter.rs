//! One-shot stat effects: counting numbers and filling progress rings.
//!
//! Both wait for their [`InViewTrigger`] and then interpolate once.

use std::time::Duration;

use crate::constants::*;
use crate::slide::{ease_in_out, lerp};
use crate::visibility::InViewTrigger;

/// A stat such as `"500+"` that counts up from zero when it scrolls into view.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimatedCounter {
    text: String,
    target: Option<u64>,
    suffix: String,
    duration: Duration,
    elapsed: Duration,
    trigger: InViewTrigger,
}

impl AnimatedCounter {
    pub fn new(text: &str) -> Self {
        Self::with_duration(text, COUNTER_DURATION)
    }

    pub fn with_duration(text: &str, duration: Duration) -> Self {
        let (target, suffix) = match parse_count(text) {
            Some((target, suffix)) => (Some(target), suffix.to_string()),
            None => (None, String::new()),
        };
        Self {
            text: text.to_string(),
            target,
            suffix,
            duration,
            elapsed: Duration::ZERO,
            trigger: InViewTrigger::default(),
        }
    }

    pub fn observe(&mut self, visible_ratio: f32) {
        self.trigger.observe(visible_ratio);
    }

    pub fn update(&mut self, dt: Duration) {
        if self.trigger.in_view() && !self.is_finished() {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
    }

    pub fn is_animated(&self) -> bool {
        self.target.is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.target.is_none() || self.elapsed >= self.duration
    }

    pub fn value(&self) -> u64 {
        let Some(target) = self.target else {
            return 0;
        };
        if self.duration.is_zero() {
            return if self.trigger.in_view() { target } else { 0 };
        }
        let progress = (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0);
        (progress * target as f64).floor() as u64
    }

    /// Current display text; stats that are not a leading count show verbatim.
    pub fn display(&self) -> String {
        match self.target {
            Some(_) => format!("{}{}", self.value(), self.suffix),
            None => self.text.clone(),
        }
    }
}

// "500+" -> (500, "+"), "99%" -> (99, "%"); "24/7" is not a count
fn parse_count(text: &str) -> Option<(u64, &str)> {
    let text = text.trim();
    let digits = text.find(|c: char| !c.is_ascii_digit()).unwrap_or(text.len());
    if digits == 0 {
        return None;
    }
    let (number, suffix) = text.split_at(digits);
    if suffix.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    number.parse().ok().map(|n| (n, suffix))
}

/// Progress ring drawn around a stat, staggered by its position in the row.
#[derive(Debug, Clone, PartialEq)]
pub struct StatRing {
    delay: f32,
    elapsed: f32,
    trigger: InViewTrigger,
}

impl StatRing {
    pub fn new(index: usize) -> Self {
        Self {
            delay: index as f32 * RING_STAGGER,
            elapsed: 0.0,
            trigger: InViewTrigger::default(),
        }
    }

    pub fn observe(&mut self, visible_ratio: f32) {
        self.trigger.observe(visible_ratio);
    }

    pub fn update(&mut self, dt: f32) {
        if self.trigger.in_view() {
            self.elapsed = (self.elapsed + dt).min(self.delay + RING_DURATION);
        }
    }

    /// Drawn fraction of the ring, from 0.0 up to `RING_TARGET`.
    pub fn fill(&self) -> f32 {
        let t = ((self.elapsed - self.delay) / RING_DURATION).clamp(0.0, 1.0);
        lerp(0.0, RING_TARGET, ease_in_out(t))
    }
}
