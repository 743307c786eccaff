/// Translation resource domain types
use crate::types::TranslationId;
use serde::{Deserialize, Serialize};

/// A translation resource as listed by `GET /resources/translations`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    /// Resource identifier, used as the `translations` query parameter
    pub id: TranslationId,

    /// Resource name
    pub name: String,

    /// Translator
    #[serde(default)]
    pub author_name: Option<String>,
}
