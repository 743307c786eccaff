//! Configuration and request types for the content API.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use tilawa_core::{RecitationId, SurahId, TranslationId};

/// Default upstream base path
pub const DEFAULT_BASE_URL: &str = "https://api.quran.com/api/v4";

/// Host serving the relative verse audio paths
pub const DEFAULT_AUDIO_BASE_URL: &str = "https://verses.quran.com/";

/// Upstream maximum for `per_page`
pub const DEFAULT_VERSES_PER_PAGE: u32 = 50;

/// Where a response body keeps its payload.
///
/// One contract is active per client. `Named` matches the public v4 API
/// (`{"chapters": [...]}`); `Data` matches proxies that wrap every payload as
/// `{"data": ...}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Envelope {
    /// Payload under a resource-specific field
    #[default]
    Named,
    /// Payload under a generic `data` field
    Data,
}

/// Resources the client reads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    /// Chapter list
    Chapters,
    /// Recitation list
    Recitations,
    /// Language list
    Languages,
    /// Translation list
    Translations,
    /// Verses of a chapter
    Verses,
    /// Full-chapter audio file
    ChapterAudio,
}

impl Resource {
    /// Human name used in errors and logs
    pub fn name(self) -> &'static str {
        match self {
            Resource::Chapters => "chapters",
            Resource::Recitations => "recitations",
            Resource::Languages => "languages",
            Resource::Translations => "translations",
            Resource::Verses => "verses",
            Resource::ChapterAudio => "chapter audio",
        }
    }

    /// Top-level field that holds the payload under `envelope`
    pub fn field(self, envelope: Envelope) -> &'static str {
        match envelope {
            Envelope::Data => "data",
            Envelope::Named => match self {
                Resource::Chapters => "chapters",
                Resource::Recitations => "recitations",
                Resource::Languages => "languages",
                Resource::Translations => "translations",
                Resource::Verses => "verses",
                Resource::ChapterAudio => "audio_file",
            },
        }
    }
}

/// Configuration for connecting to the content API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL including the version path
    pub base_url: String,
    /// Base URL that relative verse audio paths are joined onto
    pub audio_base_url: String,
    /// Envelope contract
    pub envelope: Envelope,
    /// `per_page` sent with verse requests
    pub verses_per_page: u32,
    /// Whole-request timeout
    pub timeout: Duration,
}

impl ApiConfig {
    /// Config for `base_url` with defaults for everything else.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Use a different envelope contract.
    pub fn with_envelope(mut self, envelope: Envelope) -> Self {
        self.envelope = envelope;
        self
    }

    /// Use a different audio host.
    pub fn with_audio_base_url(mut self, url: impl Into<String>) -> Self {
        self.audio_base_url = url.into();
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            audio_base_url: DEFAULT_AUDIO_BASE_URL.to_string(),
            envelope: Envelope::Named,
            verses_per_page: DEFAULT_VERSES_PER_PAGE,
            timeout: Duration::from_secs(30),
        }
    }
}

/// Parameters of a verse list request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseQuery {
    /// Chapter to list
    pub surah: SurahId,
    /// Language code for translated names
    pub language: String,
    /// Translation to attach, if any
    pub translation: Option<TranslationId>,
    /// Recitation whose audio to attach, if any
    pub recitation: Option<RecitationId>,
}

/// `audio_file` payload of `GET /chapter_recitations/{recitation}/{chapter}`
#[derive(Debug, Deserialize)]
pub(crate) struct ChapterAudioFile {
    pub audio_url: String,
}
