/// Surah (chapter) domain types
use crate::types::SurahId;
use serde::{Deserialize, Serialize};

/// A chapter as listed by `GET /chapters`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Surah {
    /// Chapter number
    pub id: SurahId,

    /// Transliterated name, e.g. "Al-Fatihah"
    pub name_simple: String,

    /// Arabic name
    pub name_arabic: String,

    /// Name in the requested language
    pub translated_name: TranslatedName,

    /// Number of verses in the chapter
    pub verses_count: u32,

    /// "makkah" or "madinah" when upstream provides it
    #[serde(default)]
    pub revelation_place: Option<String>,
}

/// Localised chapter name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedName {
    /// Language the name is written in
    #[serde(default)]
    pub language_name: Option<String>,

    /// The translated name itself
    pub name: String,
}

impl Surah {
    /// Case-insensitive substring match against the simple, Arabic and
    /// translated names.
    ///
    /// `needle` must already be lowercased; an empty needle matches.
    pub fn matches(&self, needle: &str) -> bool {
        [
            self.name_simple.as_str(),
            self.name_arabic.as_str(),
            self.translated_name.name.as_str(),
        ]
        .iter()
        .any(|name| name.to_lowercase().contains(needle))
    }

    /// "Al-Fatihah - الفاتحة"
    pub fn display_name(&self) -> String {
        format!("{} - {}", self.name_simple, self.name_arabic)
    }
}
