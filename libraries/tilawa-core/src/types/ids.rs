/// ID types for upstream content entities
use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! numeric_id {
    ($(#[$meta:meta])* $name:ident, $inner:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name($inner);

        impl $name {
            /// Wrap a raw upstream id
            pub const fn new(id: $inner) -> Self {
                Self(id)
            }

            /// Get the raw id
            pub const fn get(self) -> $inner {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            fn from(id: $inner) -> Self {
                Self(id)
            }
        }
    };
}

numeric_id!(
    /// Surah (chapter) identifier, 1-114 upstream
    SurahId,
    u32
);

numeric_id!(
    /// Verse identifier (global across the mushaf)
    VerseId,
    u64
);

numeric_id!(
    /// Recitation identifier
    RecitationId,
    u32
);

numeric_id!(
    /// Translation resource identifier
    TranslationId,
    u32
);
