/// Reading goal domain types
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily target used when no goal has been stored yet
pub const DEFAULT_VERSES_PER_DAY: u32 = 10;

/// Daily reading target and running counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingGoal {
    /// Verses to read per day
    pub verses_per_day: u32,

    /// Day the goal was created
    pub start_date: NaiveDate,

    /// Day of the most recent "mark as read"
    #[serde(default)]
    pub last_read_date: Option<NaiveDate>,

    /// Cumulative verses read since `start_date`
    pub total_verses_read: u64,

    /// Verses read on `last_read_date`
    #[serde(default)]
    pub verses_read_today: u64,
}

/// Result of recording read verses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOutcome {
    /// Cumulative total after recording
    pub total: u64,

    /// Progress counted against the daily target after recording
    pub progress: u64,

    /// True only on the mark that crossed the target
    pub goal_reached: bool,
}

impl ReadingGoal {
    /// New goal starting today with nothing read
    pub fn new(verses_per_day: u32, today: NaiveDate) -> Self {
        Self {
            verses_per_day,
            start_date: today,
            last_read_date: None,
            total_verses_read: 0,
            verses_read_today: 0,
        }
    }

    /// Progress counted against the daily target.
    ///
    /// With `daily_reset` the counter only covers `today`; without it the
    /// cumulative total is used.
    pub fn progress(&self, today: NaiveDate, daily_reset: bool) -> u64 {
        if !daily_reset {
            return self.total_verses_read;
        }
        if self.last_read_date == Some(today) {
            self.verses_read_today
        } else {
            0
        }
    }

    /// Whether the daily target has been met
    pub fn is_met(&self, today: NaiveDate, daily_reset: bool) -> bool {
        self.progress(today, daily_reset) >= u64::from(self.verses_per_day)
    }

    /// Record `count` verses read on `today`
    pub fn record_read(&mut self, count: u32, today: NaiveDate, daily_reset: bool) -> ReadOutcome {
        let target = u64::from(self.verses_per_day);
        let before = self.progress(today, daily_reset);

        if self.last_read_date != Some(today) {
            self.verses_read_today = 0;
        }
        self.verses_read_today += u64::from(count);
        self.total_verses_read += u64::from(count);
        self.last_read_date = Some(today);

        let progress = self.progress(today, daily_reset);

        ReadOutcome {
            total: self.total_verses_read,
            progress,
            goal_reached: before < target && progress >= target,
        }
    }
}
