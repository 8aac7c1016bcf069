use chrono::{Local, NaiveDateTime, SubsecRound};

/// Source of the current local time for the task service.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Wall clock, truncated to whole seconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local().trunc_subsecs(0)
    }
}

/// Always returns the same instant. Used to pin "now" in tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
