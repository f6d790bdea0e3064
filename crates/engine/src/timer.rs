//! Interval timer with a reconfigurable period.
//!
//! The timer holds no callback. Its owner feeds it elapsed time and asks
//! whether a period boundary has passed, then runs whatever handler is current
//! at that moment. Handlers therefore always observe live state.

use std::time::Duration;

/// Periodic trigger driven by externally measured elapsed time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntervalTimer {
    period: Option<Duration>,
    elapsed: Duration,
}

impl IntervalTimer {
    /// Create a timer; `None` creates it disabled
    pub fn new(period: Option<Duration>) -> Self {
        Self {
            period: period.filter(|p| !p.is_zero()),
            elapsed: Duration::ZERO,
        }
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    /// Change the period. A different period restarts the phase; `None`
    /// disables the timer. Zero periods are treated as `None`.
    pub fn set_period(&mut self, period: Option<Duration>) {
        let period = period.filter(|p| !p.is_zero());
        if period != self.period {
            self.period = period;
            self.elapsed = Duration::ZERO;
        }
    }

    /// Account for elapsed wall time. A disabled timer does not accumulate.
    pub fn advance(&mut self, elapsed: Duration) {
        if self.period.is_some() {
            self.elapsed = self.elapsed.saturating_add(elapsed);
        }
    }

    /// Consume one due period. Call repeatedly until it returns `false`.
    pub fn fire(&mut self) -> bool {
        match self.period {
            Some(period) if self.elapsed >= period => {
                self.elapsed -= period;
                true
            }
            _ => false,
        }
    }

    /// Time left until the next boundary, `None` while disabled
    pub fn until_next(&self) -> Option<Duration> {
        self.period.map(|p| p.saturating_sub(self.elapsed))
    }
}

impl Default for IntervalTimer {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn test_fires_once_per_period() {
        let mut timer = IntervalTimer::new(Some(ms(100)));
        timer.advance(ms(99));
        assert!(!timer.fire());

        timer.advance(ms(1));
        assert!(timer.fire());
        assert!(!timer.fire());

        timer.advance(ms(250));
        assert!(timer.fire());
        assert!(timer.fire());
        assert!(!timer.fire());
        assert_eq!(timer.until_next(), Some(ms(50)));
    }

    #[test]
    fn test_disabled_timer_never_fires() {
        let mut timer = IntervalTimer::new(None);
        timer.advance(ms(10_000));
        assert!(!timer.fire());
        assert_eq!(timer.until_next(), None);

        timer.set_period(Some(ms(10)));
        assert!(!timer.fire(), "time spent disabled must not carry over");
    }

    #[test]
    fn test_period_change_restarts_phase() {
        let mut timer = IntervalTimer::new(Some(ms(800)));
        timer.advance(ms(700));

        timer.set_period(Some(ms(800)));
        assert_eq!(timer.until_next(), Some(ms(100)), "same period keeps phase");

        timer.set_period(Some(ms(100)));
        assert_eq!(timer.until_next(), Some(ms(100)));
        assert!(!timer.fire());
    }

    #[test]
    fn test_zero_period_disables() {
        let mut timer = IntervalTimer::new(Some(Duration::ZERO));
        timer.advance(ms(5));
        assert!(!timer.fire());
        assert_eq!(timer.period(), None);
    }
}
