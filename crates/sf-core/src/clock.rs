use chrono::Local;
use sf_model::ReviewDate;

/// Supplies the date reviews are recorded against.
pub trait Clock {
    fn today(&self) -> ReviewDate;
}

/// The local calendar date.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> ReviewDate {
        ReviewDate::from(Local::now().date_naive())
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub ReviewDate);

impl Clock for FixedClock {
    fn today(&self) -> ReviewDate {
        self.0
    }
}
