//! Controller configuration and read-only views

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tilawa_core::{
    BookmarkSet, Language, ReadingGoal, Recitation, Surah, Translation, Verse,
    DEFAULT_VERSES_PER_DAY,
};

use crate::notice::Notice;

/// Where recitation audio comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AudioMode {
    /// Per-verse audio URLs embedded in the verse list
    #[default]
    VerseEmbedded,

    /// One file per chapter, resolved separately
    ChapterRecitation,
}

/// Controller configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// ISO code of the language selected at startup
    pub default_language: String,

    /// Audio source mode
    pub audio_mode: AudioMode,

    /// Reset the reading-goal progress when the day changes
    pub daily_reset: bool,

    /// Daily target used when no goal is stored
    pub default_daily_target: u32,

    /// Volume at startup (0.0 - 1.0)
    pub initial_volume: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            default_language: "en".to_string(),
            audio_mode: AudioMode::VerseEmbedded,
            daily_reset: true,
            default_daily_target: DEFAULT_VERSES_PER_DAY,
            initial_volume: 1.0,
        }
    }
}

/// Read-only view of everything the presentation renders
#[derive(Debug, Clone, Copy)]
pub struct PlayerSnapshot<'a> {
    pub language: Option<&'a Language>,
    pub surah: Option<&'a Surah>,
    pub recitation: Option<&'a Recitation>,
    pub translation: Option<&'a Translation>,
    pub filtered_surahs: &'a [Surah],
    pub verses: &'a [Verse],
    pub current_verse: Option<&'a Verse>,
    pub position: Duration,
    pub duration: Duration,
    pub is_playing: bool,
    pub volume: f32,
    pub search_term: &'a str,
    pub bookmarks: &'a BookmarkSet,
    pub reading_goal: &'a ReadingGoal,
    /// Progress against the daily target as of today
    pub goal_progress: u64,
    pub current_is_bookmarked: bool,
    pub pending_notices: &'a [Notice],
}
