/// Verse domain types
use crate::error::TilawaError;
use crate::types::VerseId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Composite "chapter:verse" key, e.g. `2:255`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VerseKey {
    chapter: u32,
    verse: u32,
}

impl VerseKey {
    /// Create a key from its parts
    pub const fn new(chapter: u32, verse: u32) -> Self {
        Self { chapter, verse }
    }

    /// Chapter number
    pub const fn chapter(&self) -> u32 {
        self.chapter
    }

    /// Verse number within the chapter
    pub const fn verse(&self) -> u32 {
        self.verse
    }
}

impl FromStr for VerseKey {
    type Err = TilawaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (chapter, verse) = s
            .split_once(':')
            .ok_or_else(|| TilawaError::invalid_input(format!("verse key without ':': {s}")))?;

        let chapter = chapter
            .trim()
            .parse::<u32>()
            .map_err(|_| TilawaError::invalid_input(format!("bad chapter in verse key: {s}")))?;
        let verse = verse
            .trim()
            .parse::<u32>()
            .map_err(|_| TilawaError::invalid_input(format!("bad verse in verse key: {s}")))?;

        if chapter == 0 || verse == 0 {
            return Err(TilawaError::invalid_input(format!(
                "verse key parts start at 1: {s}"
            )));
        }

        Ok(Self { chapter, verse })
    }
}

impl TryFrom<String> for VerseKey {
    type Error = TilawaError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VerseKey> for String {
    fn from(key: VerseKey) -> Self {
        key.to_string()
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chapter, self.verse)
    }
}

/// One translation text attached to a verse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseTranslation {
    /// Translation resource the text comes from
    #[serde(default)]
    pub resource_id: Option<u32>,

    /// Translated text, may contain footnote markup
    pub text: String,
}

/// Verse audio reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseAudio {
    /// Absolute URL once resolved by the API client, relative upstream
    pub url: String,
}

/// A verse as returned by `GET /verses/by_chapter/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Global verse identifier
    pub id: VerseId,

    /// Chapter:verse key
    pub verse_key: VerseKey,

    /// Number within the chapter
    #[serde(default)]
    pub verse_number: Option<u32>,

    /// Uthmani script text
    #[serde(default)]
    pub text_uthmani: String,

    /// Translation texts in requested order
    #[serde(default)]
    pub translations: Vec<VerseTranslation>,

    /// Audio for the selected recitation
    #[serde(default)]
    pub audio: Option<VerseAudio>,
}

impl Verse {
    /// First translation text, if any
    pub fn first_translation(&self) -> Option<&str> {
        self.translations.first().map(|t| t.text.as_str())
    }

    /// Audio URL, if the verse carries one
    pub fn audio_url(&self) -> Option<&str> {
        self.audio.as_ref().map(|a| a.url.as_str())
    }
}
