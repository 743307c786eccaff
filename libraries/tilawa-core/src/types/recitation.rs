/// Recitation domain types
use crate::types::RecitationId;
use serde::{Deserialize, Serialize};

/// A reciter's recording of the full text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recitation {
    /// Recitation identifier
    pub id: RecitationId,

    /// Reciter name
    pub reciter_name: String,

    /// Recitation style ("Murattal", "Mujawwad", ...)
    #[serde(default)]
    pub style: Option<String>,
}

impl Recitation {
    /// Reciter name with the style appended when known
    pub fn display_name(&self) -> String {
        match &self.style {
            Some(style) if !style.is_empty() => format!("{} ({})", self.reciter_name, style),
            _ => self.reciter_name.clone(),
        }
    }
}
