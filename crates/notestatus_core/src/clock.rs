//! Injectable calendar date source for status stamps.

use chrono::{Local, NaiveDate};

/// Stamp format persisted into `started`, `waiting-since` and `completed`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Calendar date source. Injecting it keeps stamping deterministic in tests.
pub trait Clock {
    fn today(&self) -> NaiveDate;

    /// Today formatted as `YYYY-MM-DD`.
    fn date_stamp(&self) -> String {
        self.today().format(DATE_FORMAT).to_string()
    }
}

/// Wall-clock dates in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Fixed date for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
