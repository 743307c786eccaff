//! Clock-driven media element
//!
//! The terminal has no audio output. [`ClockMedia`] behaves like one: it
//! accepts sources, keeps a playhead that advances with wall-clock ticks and
//! reports everything as [`MediaEvent`]s, the same way a real element would.
//! Every source is assumed to last a fixed nominal length.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tilawa_playback::{MediaElement, MediaError, MediaEvent};
use tokio::sync::mpsc;
use tracing::{debug, trace};

#[derive(Debug)]
struct ClockState {
    source: Option<String>,
    playing: bool,
    position: Duration,
    duration: Duration,
    volume: f32,
}

#[derive(Debug, Clone)]
struct Shared {
    state: Arc<Mutex<ClockState>>,
    events: mpsc::UnboundedSender<MediaEvent>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, ClockState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn emit(&self, event: MediaEvent) {
        if self.events.send(event).is_err() {
            debug!("Media event receiver dropped");
        }
    }
}

/// The element handed to the controller
pub struct ClockMedia {
    shared: Shared,
    track_length: Duration,
}

/// Handle the event loop uses to advance the clock
#[derive(Clone)]
pub struct ClockDriver {
    shared: Shared,
}

impl ClockMedia {
    /// Create an element whose sources last `track_length`, reporting to `events`
    pub fn new(
        track_length: Duration,
        events: mpsc::UnboundedSender<MediaEvent>,
    ) -> (Self, ClockDriver) {
        let shared = Shared {
            state: Arc::new(Mutex::new(ClockState {
                source: None,
                playing: false,
                position: Duration::ZERO,
                duration: Duration::ZERO,
                volume: 1.0,
            })),
            events,
        };
        let driver = ClockDriver {
            shared: shared.clone(),
        };
        (
            Self {
                shared,
                track_length,
            },
            driver,
        )
    }
}

impl MediaElement for ClockMedia {
    fn load(&mut self, url: &str) {
        debug!(url, "Loading source");
        let was_playing = {
            let mut state = self.shared.lock();
            let was_playing = state.playing;
            state.source = Some(url.to_string());
            state.playing = false;
            state.position = Duration::ZERO;
            state.duration = self.track_length;
            was_playing
        };

        if was_playing {
            self.shared.emit(MediaEvent::Paused);
        }
        self.shared.emit(MediaEvent::LoadedMetadata {
            duration: self.track_length,
        });
    }

    fn play(&mut self) -> Result<(), MediaError> {
        let started = {
            let mut state = self.shared.lock();
            if state.source.is_none() {
                return Err(MediaError::NoSource);
            }
            if state.position >= state.duration {
                state.position = Duration::ZERO;
            }
            !std::mem::replace(&mut state.playing, true)
        };

        if started {
            self.shared.emit(MediaEvent::Playing);
        }
        Ok(())
    }

    fn pause(&mut self) {
        let stopped = std::mem::replace(&mut self.shared.lock().playing, false);
        if stopped {
            self.shared.emit(MediaEvent::Paused);
        }
    }

    fn seek(&mut self, position: Duration) {
        let (position, duration) = {
            let mut state = self.shared.lock();
            state.position = position.min(state.duration);
            (state.position, state.duration)
        };
        self.shared
            .emit(MediaEvent::TimeUpdate { position, duration });
    }

    fn set_volume(&mut self, volume: f32) {
        self.shared.lock().volume = volume;
    }
}

impl ClockDriver {
    /// Advance the playhead by `elapsed` if playing
    pub fn tick(&self, elapsed: Duration) {
        let (position, duration, ended) = {
            let mut state = self.shared.lock();
            if !state.playing {
                return;
            }
            state.position = (state.position + elapsed).min(state.duration);
            let ended = state.position >= state.duration;
            if ended {
                state.playing = false;
            }
            (state.position, state.duration, ended)
        };

        trace!(?position, "Tick");
        self.shared
            .emit(MediaEvent::TimeUpdate { position, duration });
        if ended {
            self.shared.emit(MediaEvent::Ended);
        }
    }

    /// Currently loaded source
    pub fn source(&self) -> Option<String> {
        self.shared.lock().source.clone()
    }

    pub fn volume(&self) -> f32 {
        self.shared.lock().volume
    }
}
