//! Tilawa - Player State Controller
//!
//! Platform-agnostic state machine for the recitation player.
//!
//! This crate provides:
//! - Language, surah, recitation and translation selection
//! - Verse navigation with wrap-around and auto-advance
//! - Transport mirroring (position, duration, playing flag, volume)
//! - Surah search
//! - Bookmarks and a daily reading goal, persisted through `tilawa-storage`
//! - Verse sharing with clipboard fallback
//! - Per-resource request sequencing against out-of-order responses
//!
//! # Architecture
//!
//! `tilawa-playback` never performs I/O on its own initiative:
//! - Content fetches are returned as [`FetchRequest`]s and executed by the
//!   [`Dispatcher`] (or anything else); outcomes come back through
//!   [`PlayerController::apply_outcome`]
//! - Audio output goes through the [`MediaElement`] trait; its status comes
//!   back as [`MediaEvent`]s
//! - Sharing goes through the [`ShareTarget`] trait
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tilawa_api_client::{ApiConfig, QuranApiClient};
//! use tilawa_playback::{Dispatcher, PlayerConfig, PlayerController, SystemClock};
//! use tilawa_storage::MemoryStore;
//! # use tilawa_playback::{MediaElement, ShareTarget};
//! # async fn example(
//! #     media: Box<dyn MediaElement>,
//! #     share: Box<dyn ShareTarget>,
//! # ) -> Result<(), Box<dyn std::error::Error>> {
//!
//! let api = Arc::new(QuranApiClient::new(ApiConfig::default())?);
//! let (tx, mut outcomes) = tokio::sync::mpsc::unbounded_channel();
//! let dispatcher = Dispatcher::new(api, tx);
//!
//! let mut player = PlayerController::new(
//!     PlayerConfig::default(),
//!     media,
//!     share,
//!     Arc::new(MemoryStore::new()),
//!     Arc::new(SystemClock),
//! );
//! player.restore_local_state().await;
//! dispatcher.dispatch(player.initial_load());
//!
//! while let Some(outcome) = outcomes.recv().await {
//!     dispatcher.dispatch_all(player.apply_outcome(outcome));
//! }
//! # Ok(())
//! # }
//! ```

mod clock;
mod controller;
mod dispatcher;
mod error;
mod fetch;
mod media;
mod notice;
mod search;
mod sequencer;
mod share;
pub mod types;

// Public exports
pub use clock::{Clock, FixedClock, SystemClock};
pub use controller::{share_text, PlayerController};
pub use dispatcher::{execute, Dispatcher};
pub use error::{MediaError, PlayerError, Result, ShareError};
pub use fetch::{CatalogData, FetchOutcome, FetchRequest, Listings};
pub use media::{MediaElement, MediaEvent};
pub use notice::{Notice, NoticeKind};
pub use search::filter_surahs;
pub use sequencer::{RequestSequencer, ResourceKind, Ticket};
pub use share::ShareTarget;
pub use types::{AudioMode, PlayerConfig, PlayerSnapshot};
