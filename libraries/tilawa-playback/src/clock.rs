//! Wall clock seam

use chrono::{Datelike, Local, NaiveDate, Utc};
use std::sync::atomic::{AtomicI32, AtomicI64, Ordering};

/// Source of the current date and timestamp
pub trait Clock: Send + Sync {
    /// Local calendar date
    fn today(&self) -> NaiveDate;

    /// Milliseconds since the Unix epoch
    fn now_millis(&self) -> i64;
}

/// System clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Manually advanced clock
#[derive(Debug)]
pub struct FixedClock {
    days_from_ce: AtomicI32,
    millis: AtomicI64,
}

impl FixedClock {
    /// Clock standing on `date`, at `millis`
    pub fn new(date: NaiveDate, millis: i64) -> Self {
        Self {
            days_from_ce: AtomicI32::new(date.num_days_from_ce()),
            millis: AtomicI64::new(millis),
        }
    }

    /// Move to another date
    pub fn set_today(&self, date: NaiveDate) {
        self.days_from_ce
            .store(date.num_days_from_ce(), Ordering::SeqCst);
    }

    /// Advance the timestamp
    pub fn advance_millis(&self, millis: i64) {
        self.millis.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        NaiveDate::from_num_days_from_ce_opt(self.days_from_ce.load(Ordering::SeqCst))
            .unwrap_or_default()
    }

    fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }
}
