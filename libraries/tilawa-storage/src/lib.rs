//! Tilawa Storage
//!
//! `SQLite` persistence for the user-local player state: the bookmark list and
//! the reading goal.
//!
//! # Architecture
//!
//! - **Key-Value**: one `local_state` table, JSON documents under fixed keys
//! - **Vertical Slicing**: each record owns its key and its load/save logic
//! - **Lenient Reads**: unreadable records load as defaults
//!
//! # Example
//!
//! ```rust,no_run
//! use tilawa_storage::{bookmarks, create_pool, run_migrations, SqliteStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://tilawa.db").await?;
//! run_migrations(&pool).await?;
//!
//! let store = SqliteStore::new(pool);
//! let saved = bookmarks::load(&store).await;
//! println!("{} bookmarks", saved.len());
//! # Ok(())
//! # }
//! ```

mod error;
mod store;

// Vertical slices
pub mod bookmarks;
pub mod reading_goal;

pub use error::{Result, StorageError};
pub use store::{get_json, set_json, LocalStore, MemoryStore, SqliteStore};

use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;
use tracing::debug;

// Embed migrations into binary
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Run database migrations
///
/// Call once at startup, before handing the pool to a [`SqliteStore`].
///
/// # Errors
///
/// Returns an error if migrations fail to run
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    MIGRATOR.run(pool).await?;
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://tilawa.db>`)
///
/// # Errors
///
/// Returns an error if the connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    debug!(url = %database_url, "Creating SQLite pool");

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}
