//! Calendar source for case dates
//!
//! The store asks a [`Clock`] for "today" when it stamps creation logs,
//! completion dates and new identifiers.

use chrono::NaiveDate;
use parking_lot::Mutex;
use std::fmt::Debug;

/// Source of the current date
pub trait Clock: Send + Sync + Debug {
    /// Current local date
    fn today(&self) -> NaiveDate;
}

/// Wall clock in the local timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        chrono::Local::now().date_naive()
    }
}

/// Clock that only moves when told to
#[derive(Debug)]
pub struct ManualClock {
    today: Mutex<NaiveDate>,
}

impl ManualClock {
    /// Create clock fixed at `today`
    #[inline]
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today: Mutex::new(today),
        }
    }

    /// Move the clock to `date`
    pub fn set(&self, date: NaiveDate) {
        *self.today.lock() = date;
    }

    /// Advance the clock by `days`
    pub fn advance_days(&self, days: u64) {
        let mut guard = self.today.lock();
        if let Some(next) = guard.checked_add_days(chrono::Days::new(days)) {
            *guard = next;
        }
    }
}

impl Clock for ManualClock {
    fn today(&self) -> NaiveDate {
        *self.today.lock()
    }
}
