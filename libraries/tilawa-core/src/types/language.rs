/// Language domain types
use serde::{Deserialize, Serialize};

/// A content language as listed by `GET /resources/languages`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    /// ISO 639-1 code, used as the `language` query parameter
    pub iso_code: String,

    /// Name of the language in itself
    pub native_name: String,

    /// English name of the language
    #[serde(default)]
    pub name: Option<String>,
}

impl Language {
    /// Language used before the language list has been fetched
    pub fn english() -> Self {
        Self {
            iso_code: "en".to_string(),
            native_name: "English".to_string(),
            name: Some("english".to_string()),
        }
    }

    /// Synthetic entry for a code that is not in the fetched list
    pub fn from_code(code: impl Into<String>) -> Self {
        let code = code.into();
        Self {
            native_name: code.clone(),
            iso_code: code,
            name: None,
        }
    }

    /// "English (en)"
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.native_name, self.iso_code)
    }
}
