//! Media element seam
//!
//! The controller never decodes audio. It drives a [`MediaElement`] and
//! learns what actually happened from the [`MediaEvent`]s the element emits.

use crate::error::MediaError;
use std::time::Duration;

/// Platform audio element
///
/// Implementations report status changes asynchronously as [`MediaEvent`]s;
/// the controller's playing flag only follows those events.
pub trait MediaElement: Send {
    /// Replace the current source. Playback does not start on its own.
    fn load(&mut self, url: &str);

    /// Request playback of the loaded source
    fn play(&mut self) -> Result<(), MediaError>;

    /// Pause playback
    fn pause(&mut self);

    /// Move the playhead
    fn seek(&mut self, position: Duration);

    /// Set output volume in [0, 1]
    fn set_volume(&mut self, volume: f32);
}

/// Status reported by a media element
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    /// Playback started or resumed
    Playing,

    /// Playback paused or stopped
    Paused,

    /// Periodic playhead update
    TimeUpdate {
        /// Current position
        position: Duration,
        /// Total length of the source
        duration: Duration,
    },

    /// Source metadata became available
    LoadedMetadata {
        /// Total length of the source
        duration: Duration,
    },

    /// The source played to its end
    Ended,

    /// The source could not be played
    Failed(String),
}
