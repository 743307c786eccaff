//! Persisted bookmark list
//!
//! The whole set is stored as one JSON array under [`BOOKMARKS_KEY`] and
//! rewritten after every toggle.

use tilawa_core::BookmarkSet;
use tracing::warn;

use crate::error::Result;
use crate::store::{get_json, set_json, LocalStore};

/// Key of the bookmark record
pub const BOOKMARKS_KEY: &str = "bookmarks";

/// Load the stored bookmarks.
///
/// A missing record is an empty set. So is a record that cannot be read or
/// decoded; the failure is logged and otherwise ignored.
pub async fn load(store: &dyn LocalStore) -> BookmarkSet {
    match get_json::<BookmarkSet>(store, BOOKMARKS_KEY).await {
        Ok(Some(set)) => set,
        Ok(None) => BookmarkSet::default(),
        Err(e) => {
            warn!(error = %e, "Stored bookmarks unreadable, starting empty");
            BookmarkSet::default()
        }
    }
}

/// Replace the stored bookmarks with `set`.
pub async fn save(store: &dyn LocalStore, set: &BookmarkSet) -> Result<()> {
    set_json(store, BOOKMARKS_KEY, set).await
}
