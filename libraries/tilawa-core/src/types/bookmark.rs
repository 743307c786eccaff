/// Bookmark domain types
use crate::types::{SurahId, VerseId, VerseKey};
use serde::{Deserialize, Serialize};

/// A user-created bookmark on one verse
///
/// Serialized in camelCase so records written by earlier web builds of the
/// player (`surahId`, `verseId`, `timestamp`) still load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    /// Chapter the verse belongs to
    pub surah_id: SurahId,

    /// Bookmarked verse
    pub verse_id: VerseId,

    /// Verse key, for display without a verse fetch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verse_key: Option<VerseKey>,

    /// Creation time, milliseconds since the Unix epoch
    pub timestamp: i64,
}

impl Bookmark {
    /// Identity used for set semantics
    pub fn key(&self) -> (SurahId, VerseId) {
        (self.surah_id, self.verse_id)
    }
}

/// What a toggle did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookmarkAction {
    /// A new bookmark was inserted
    Added,
    /// An existing bookmark was removed
    Removed,
}

/// Bookmarks with set semantics on (surah id, verse id), in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Bookmark>", into = "Vec<Bookmark>")]
pub struct BookmarkSet {
    entries: Vec<Bookmark>,
}

impl BookmarkSet {
    /// Insert a bookmark for the pair, or remove the existing one
    pub fn toggle(
        &mut self,
        surah_id: SurahId,
        verse_id: VerseId,
        verse_key: Option<VerseKey>,
        timestamp: i64,
    ) -> BookmarkAction {
        if let Some(index) = self.position(surah_id, verse_id) {
            self.entries.remove(index);
            BookmarkAction::Removed
        } else {
            self.entries.push(Bookmark {
                surah_id,
                verse_id,
                verse_key,
                timestamp,
            });
            BookmarkAction::Added
        }
    }

    /// Whether the pair is bookmarked
    pub fn contains(&self, surah_id: SurahId, verse_id: VerseId) -> bool {
        self.position(surah_id, verse_id).is_some()
    }

    /// Bookmark at a list position
    pub fn get(&self, index: usize) -> Option<&Bookmark> {
        self.entries.get(index)
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Bookmark> {
        self.entries.iter()
    }

    /// Number of bookmarks
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no bookmarks
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, surah_id: SurahId, verse_id: VerseId) -> Option<usize> {
        self.entries
            .iter()
            .position(|b| b.surah_id == surah_id && b.verse_id == verse_id)
    }
}

impl From<Vec<Bookmark>> for BookmarkSet {
    /// Later duplicates of a pair are dropped
    fn from(entries: Vec<Bookmark>) -> Self {
        let mut set = Self::default();
        for bookmark in entries {
            if !set.contains(bookmark.surah_id, bookmark.verse_id) {
                set.entries.push(bookmark);
            }
        }
        set
    }
}

impl From<BookmarkSet> for Vec<Bookmark> {
    fn from(set: BookmarkSet) -> Self {
        set.entries
    }
}
