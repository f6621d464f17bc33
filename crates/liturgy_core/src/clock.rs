//! Injected source for the default calendar year.

use chrono::{Datelike, Local};

/// Provides the year used when a run does not request one.
pub trait Clock {
    fn current_year(&self) -> i32;
}

/// Reads the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        Local::now().year()
    }
}

/// Always reports the same year. Used by tests and reproducible runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i32);

impl Clock for FixedClock {
    fn current_year(&self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::{Clock, FixedClock, SystemClock};

    #[test]
    fn fixed_clock_reports_its_year() {
        assert_eq!(FixedClock(2019).current_year(), 2019);
    }

    #[test]
    fn system_clock_reports_a_plausible_year() {
        assert!(SystemClock.current_year() >= 2024);
    }
}
