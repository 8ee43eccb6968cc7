//! Paged selection over a fixed list of items with timed auto-advance.
//!
//! A [`RotatingSelector`] shows one page of `page_size` items at a time,
//! moves to the next page every `interval` while auto-advance is on, and
//! lets the user step, jump or pause. Time only enters through
//! [`RotatingSelector::tick`], which keeps the state machine deterministic;
//! [`crate::driver`] hosts a selector on real timers.

use std::num::NonZeroUsize;
use std::time::Duration;

use tracing::{debug, trace};

use crate::error::SelectorError;
use crate::state::AutoAdvance;
use crate::timer::Countdown;

#[derive(Debug, Clone)]
pub struct RotatingSelector<T> {
    items: Vec<T>,
    page_size: NonZeroUsize,
    current_page: usize,
    auto_advance: AutoAdvance,
    interval: Duration,
    // At most one armed timer per selector
    countdown: Option<Countdown>,
}

impl<T> RotatingSelector<T> {
    /// Creates a selector on page 0 with auto-advance on.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::ZeroPageSize`] or [`SelectorError::ZeroInterval`]
    /// for a degenerate configuration.
    pub fn new(items: Vec<T>, page_size: usize, interval: Duration) -> Result<Self, SelectorError> {
        let page_size = NonZeroUsize::new(page_size).ok_or(SelectorError::ZeroPageSize)?;
        if interval.is_zero() {
            return Err(SelectorError::ZeroInterval);
        }

        let mut selector = Self {
            items,
            page_size,
            current_page: 0,
            auto_advance: AutoAdvance::Playing,
            interval,
            countdown: None,
        };
        selector.restart_countdown();
        Ok(selector)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn page_size(&self) -> usize {
        self.page_size.get()
    }

    /// Number of pages; zero for an empty item list.
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size.get())
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn auto_advance(&self) -> AutoAdvance {
        self.auto_advance
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance.is_playing()
    }

    /// Time left before the next automatic advance, or `None` when no timer is armed.
    pub fn time_until_advance(&self) -> Option<Duration> {
        self.countdown.as_ref().map(Countdown::remaining)
    }

    /// Moves to the next page, wrapping after the last one.
    pub fn advance(&mut self) {
        if self.step_forward() {
            self.restart_countdown();
        }
    }

    /// Moves to the previous page, wrapping before the first one.
    pub fn retreat(&mut self) {
        let page_count = self.page_count();
        if page_count == 0 {
            return;
        }
        self.current_page = (self.current_page + page_count - 1) % page_count;
        debug!(page = self.current_page, page_count, "retreat");
        self.restart_countdown();
    }

    /// Selects `index` directly, as an indicator click does.
    ///
    /// # Errors
    ///
    /// Out-of-range indices are rejected with [`SelectorError::InvalidIndex`];
    /// the current page is left untouched.
    pub fn jump_to(&mut self, index: usize) -> Result<(), SelectorError> {
        let page_count = self.page_count();
        if index >= page_count {
            return Err(SelectorError::InvalidIndex { index, page_count });
        }
        self.current_page = index;
        debug!(page = index, page_count, "jump");
        self.restart_countdown();
        Ok(())
    }

    pub fn toggle_auto_advance(&mut self) {
        self.set_auto_advance(self.auto_advance.toggled());
    }

    pub fn pause(&mut self) {
        self.set_auto_advance(AutoAdvance::Paused);
    }

    pub fn resume(&mut self) {
        self.set_auto_advance(AutoAdvance::Playing);
    }

    /// Changes the auto-advance period. The running window is discarded.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::ZeroInterval`] for a zero duration.
    pub fn set_interval(&mut self, interval: Duration) -> Result<(), SelectorError> {
        if interval.is_zero() {
            return Err(SelectorError::ZeroInterval);
        }
        self.interval = interval;
        self.restart_countdown();
        Ok(())
    }

    /// Feeds elapsed time to the auto-advance timer.
    ///
    /// Returns how many automatic advances happened. Automatic advances keep
    /// the recurring schedule; only manual navigation restarts the window.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        let Some(countdown) = self.countdown.as_mut() else {
            return 0;
        };
        let fired = countdown.tick(dt);
        for _ in 0..fired {
            self.step_forward();
        }
        fired
    }

    /// The items on page `index`; the last page may be shorter than `page_size`.
    pub fn page(&self, index: usize) -> Option<&[T]> {
        if index >= self.page_count() {
            return None;
        }
        let start = index * self.page_size.get();
        let end = (start + self.page_size.get()).min(self.items.len());
        Some(&self.items[start..end])
    }

    /// The items on the current page, empty when there are no items.
    pub fn visible(&self) -> &[T] {
        self.page(self.current_page).unwrap_or(&[])
    }

    /// One `(index, is_current)` pair per page, for indicator dots.
    pub fn indicators(&self) -> impl Iterator<Item = (usize, bool)> + '_ {
        (0..self.page_count()).map(move |index| (index, index == self.current_page))
    }

    fn set_auto_advance(&mut self, auto_advance: AutoAdvance) {
        if self.auto_advance == auto_advance {
            return;
        }
        self.auto_advance = auto_advance;
        debug!(?auto_advance, "auto-advance changed");
        self.restart_countdown();
    }

    fn step_forward(&mut self) -> bool {
        let page_count = self.page_count();
        if page_count == 0 {
            return false;
        }
        self.current_page = (self.current_page + 1) % page_count;
        trace!(page = self.current_page, page_count, "advance");
        true
    }

    // Drops any armed timer, then arms a fresh one if auto-advance should run.
    fn restart_countdown(&mut self) {
        self.countdown = None;
        if self.auto_advance.is_playing() && self.page_count() > 1 {
            self.countdown = Some(Countdown::start(self.interval));
        }
    }
}
