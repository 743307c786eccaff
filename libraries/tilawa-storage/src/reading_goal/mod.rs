//! Persisted reading goal
//!
//! A singleton record under [`READING_GOAL_KEY`].

use chrono::NaiveDate;
use tilawa_core::ReadingGoal;
use tracing::warn;

use crate::error::Result;
use crate::store::{get_json, set_json, LocalStore};

/// Key of the reading goal record
pub const READING_GOAL_KEY: &str = "reading_goal";

/// Load the stored goal, or a fresh one with `default_target` starting `today`.
///
/// Unreadable records are logged and replaced by the fresh goal.
pub async fn load(store: &dyn LocalStore, default_target: u32, today: NaiveDate) -> ReadingGoal {
    match get_json::<ReadingGoal>(store, READING_GOAL_KEY).await {
        Ok(Some(goal)) => goal,
        Ok(None) => ReadingGoal::new(default_target, today),
        Err(e) => {
            warn!(error = %e, "Stored reading goal unreadable, starting fresh");
            ReadingGoal::new(default_target, today)
        }
    }
}

/// Replace the stored goal.
pub async fn save(store: &dyn LocalStore, goal: &ReadingGoal) -> Result<()> {
    set_json(store, READING_GOAL_KEY, goal).await
}
