//! Tilawa Core
//!
//! Platform-agnostic domain types and error handling for the Tilawa
//! recitation player.
//!
//! This crate provides the building blocks shared by the API client,
//! the local state store, the player controller and the terminal front end.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Content Types**: `Surah`, `Recitation`, `Language`, `Translation`, `Verse`
//! - **Local Types**: `Bookmark`, `BookmarkSet`, `ReadingGoal`
//! - **Error Handling**: Unified `TilawaError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use tilawa_core::types::{BookmarkSet, SurahId, VerseId, VerseKey};
//!
//! let key: VerseKey = "2:255".parse().unwrap();
//! assert_eq!(key.chapter(), 2);
//!
//! let mut bookmarks = BookmarkSet::default();
//! bookmarks.toggle(SurahId::new(2), VerseId::new(262), Some(key), 1_700_000_000_000);
//! assert_eq!(bookmarks.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod text;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TilawaError};

pub use types::{
    // Content
    Language, Recitation, RecitationId, Surah, SurahId, TranslatedName, Translation,
    TranslationId, Verse, VerseAudio, VerseId, VerseKey, VerseTranslation,
    // Local state
    Bookmark, BookmarkAction, BookmarkSet, ReadOutcome, ReadingGoal, DEFAULT_VERSES_PER_DAY,
};
