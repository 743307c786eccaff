//! Tilawa API Client
//!
//! Data access layer for the public quran.com content API (v4).
//!
//! Each operation is one GET whose body is checked against the configured
//! envelope contract before the records are decoded into `tilawa-core` types.
//!
//! # Example
//!
//! ```ignore
//! use tilawa_api_client::{ApiConfig, ContentApi, Envelope, QuranApiClient, VerseQuery};
//! use tilawa_core::{SurahId, TranslationId};
//!
//! let client = QuranApiClient::new(ApiConfig::default().with_envelope(Envelope::Named))?;
//!
//! let verses = client
//!     .list_verses(&VerseQuery {
//!         surah: SurahId::new(1),
//!         language: "en".into(),
//!         translation: Some(TranslationId::new(131)),
//!         recitation: None,
//!     })
//!     .await?;
//! ```

mod client;
mod envelope;
mod error;
mod types;

pub use client::{ContentApi, QuranApiClient};
pub use envelope::extract;
pub use error::{ApiClientError, Result};
pub use types::{
    ApiConfig, Envelope, Resource, VerseQuery, DEFAULT_AUDIO_BASE_URL, DEFAULT_BASE_URL,
    DEFAULT_VERSES_PER_PAGE,
};
