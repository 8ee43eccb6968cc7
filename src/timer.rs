use std::time::Duration;

/// The recurring auto-advance timer of one selector.
///
/// A `Countdown` only exists while it is armed; cancelling it means
/// dropping the value, so a cancelled timer has nothing left that could fire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    period: Duration,
    elapsed: Duration,
}

impl Countdown {
    /// Starts a fresh window; `period` must be non-zero.
    pub fn start(period: Duration) -> Self {
        debug_assert!(!period.is_zero());
        Self { period, elapsed: Duration::ZERO }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn remaining(&self) -> Duration {
        self.period - self.elapsed
    }

    /// Adds `dt` and returns how many whole periods completed.
    ///
    /// The leftover carries into the next window, so the firing schedule
    /// stays on multiples of `period` no matter how time is sliced.
    pub fn tick(&mut self, dt: Duration) -> u32 {
        self.elapsed += dt;
        let mut fired = 0;
        while self.elapsed >= self.period {
            self.elapsed -= self.period;
            fired += 1;
        }
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(4000);

    #[test]
    fn fires_once_per_period() {
        let mut countdown = Countdown::start(PERIOD);
        assert_eq!(countdown.tick(Duration::from_millis(3999)), 0);
        assert_eq!(countdown.tick(Duration::from_millis(1)), 1);
        assert_eq!(countdown.remaining(), PERIOD);
    }

    #[test]
    fn carries_leftover_into_next_window() {
        let mut countdown = Countdown::start(PERIOD);
        assert_eq!(countdown.tick(Duration::from_millis(5000)), 1);
        assert_eq!(countdown.remaining(), Duration::from_millis(3000));
    }

    #[test]
    fn large_step_fires_several_times() {
        let mut countdown = Countdown::start(PERIOD);
        assert_eq!(countdown.tick(Duration::from_millis(12_500)), 3);
        assert_eq!(countdown.remaining(), Duration::from_millis(3500));
    }
}
