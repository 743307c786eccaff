//! Error types for the player controller

use thiserror::Error;
use tilawa_core::{RecitationId, SurahId, TranslationId, VerseId};

/// Errors raised by the media element
#[derive(Debug, Error)]
pub enum MediaError {
    /// Play requested before any source was loaded
    #[error("No audio source loaded")]
    NoSource,

    /// The element refused to start playback
    #[error("Playback rejected: {0}")]
    Rejected(String),
}

/// Errors raised by a share target
#[derive(Debug, Error)]
pub enum ShareError {
    /// Native share is not available here
    #[error("Native share not supported")]
    Unsupported,

    /// The user dismissed the share sheet
    #[error("Share cancelled")]
    Cancelled,

    /// Writing to the clipboard or share channel failed
    #[error("Share failed: {0}")]
    Failed(String),
}

/// Controller errors for intents that name something that does not exist
#[derive(Debug, Error)]
pub enum PlayerError {
    /// Surah id not in the current list
    #[error("Unknown surah: {0}")]
    UnknownSurah(SurahId),

    /// Recitation id not in the current list
    #[error("Unknown recitation: {0}")]
    UnknownRecitation(RecitationId),

    /// Translation id not in the current list
    #[error("Unknown translation: {0}")]
    UnknownTranslation(TranslationId),

    /// Language code not in the current list
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    /// Verse id not in the current verse list
    #[error("Unknown verse: {0}")]
    UnknownVerse(VerseId),

    /// Bookmark position out of range
    #[error("No bookmark at position {0}")]
    UnknownBookmark(usize),

    /// Intent needs a current surah and verse
    #[error("No verse selected")]
    NoCurrentVerse,

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

/// Result type for controller operations
pub type Result<T> = std::result::Result<T, PlayerError>;
