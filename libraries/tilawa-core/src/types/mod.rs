mod bookmark;
mod ids;
mod language;
mod reading_goal;
mod recitation;
mod surah;
mod translation;
mod verse;

pub use bookmark::{Bookmark, BookmarkAction, BookmarkSet};
pub use ids::{RecitationId, SurahId, TranslationId, VerseId};
pub use language::Language;
pub use reading_goal::{ReadOutcome, ReadingGoal, DEFAULT_VERSES_PER_DAY};
pub use recitation::Recitation;
pub use surah::{Surah, TranslatedName};
pub use translation::Translation;
pub use verse::{Verse, VerseAudio, VerseKey, VerseTranslation};
