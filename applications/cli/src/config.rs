/// Front end configuration
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tilawa_api_client::{
    ApiConfig, Envelope, DEFAULT_AUDIO_BASE_URL, DEFAULT_BASE_URL, DEFAULT_VERSES_PER_PAGE,
};
use tilawa_core::DEFAULT_VERSES_PER_DAY;
use tilawa_playback::{AudioMode, PlayerConfig};

/// Config file read from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "tilawa.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default = "default_api")]
    pub api: ApiSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_player")]
    pub player: PlayerSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_audio_base_url")]
    pub audio_base_url: String,

    #[serde(default)]
    pub envelope: Envelope,

    #[serde(default = "default_verses_per_page")]
    pub verses_per_page: u32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerSettings {
    #[serde(default = "default_language")]
    pub default_language: String,

    #[serde(default)]
    pub audio_mode: AudioMode,

    #[serde(default = "default_daily_reset")]
    pub daily_reset: bool,

    #[serde(default = "default_daily_target")]
    pub daily_target: u32,

    #[serde(default = "default_volume")]
    pub volume: f32,

    /// Media clock resolution
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Track length assumed by the media clock
    #[serde(default = "default_track_secs")]
    pub track_secs: u64,
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `tilawa.toml` is read when
    /// present. `TILAWA_<SECTION>__<KEY>` variables override both.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (e.g. TILAWA_PLAYER__DEFAULT_LANGUAGE)
        settings = settings.add_source(
            config::Environment::with_prefix("TILAWA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let base_url = self.api.base_url.trim();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(CliError::Config(format!(
                "api.base_url must be an http(s) URL, got {:?}",
                self.api.base_url
            )));
        }

        if self.api.verses_per_page == 0 || self.api.verses_per_page > DEFAULT_VERSES_PER_PAGE {
            return Err(CliError::Config(format!(
                "api.verses_per_page must be between 1 and {}",
                DEFAULT_VERSES_PER_PAGE
            )));
        }

        if self.storage.database_url.trim().is_empty() {
            return Err(CliError::Config(
                "storage.database_url is required".to_string(),
            ));
        }

        if self.player.default_language.trim().is_empty() {
            return Err(CliError::Config(
                "player.default_language is required".to_string(),
            ));
        }

        if !(0.0..=1.0).contains(&self.player.volume) {
            return Err(CliError::Config(
                "player.volume must be between 0.0 and 1.0".to_string(),
            ));
        }

        if self.player.daily_target == 0 {
            return Err(CliError::Config(
                "player.daily_target must be at least 1".to_string(),
            ));
        }

        if self.player.tick_ms == 0 || self.player.track_secs == 0 {
            return Err(CliError::Config(
                "player.tick_ms and player.track_secs must be positive".to_string(),
            ));
        }

        Ok(())
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api.base_url.clone(),
            audio_base_url: self.api.audio_base_url.clone(),
            envelope: self.api.envelope,
            verses_per_page: self.api.verses_per_page,
            timeout: Duration::from_secs(self.api.timeout_secs),
        }
    }

    pub fn player_config(&self) -> PlayerConfig {
        PlayerConfig {
            default_language: self.player.default_language.clone(),
            audio_mode: self.player.audio_mode,
            daily_reset: self.player.daily_reset,
            default_daily_target: self.player.daily_target,
            initial_volume: self.player.volume,
        }
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.player.tick_ms)
    }

    pub fn track_length(&self) -> Duration {
        Duration::from_secs(self.player.track_secs)
    }
}

// Default values
fn default_api() -> ApiSettings {
    ApiSettings {
        base_url: default_base_url(),
        audio_base_url: default_audio_base_url(),
        envelope: Envelope::default(),
        verses_per_page: default_verses_per_page(),
        timeout_secs: default_timeout_secs(),
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_audio_base_url() -> String {
    DEFAULT_AUDIO_BASE_URL.to_string()
}

fn default_verses_per_page() -> u32 {
    DEFAULT_VERSES_PER_PAGE
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./tilawa.db".to_string()
}

fn default_player() -> PlayerSettings {
    PlayerSettings {
        default_language: default_language(),
        audio_mode: AudioMode::default(),
        daily_reset: default_daily_reset(),
        daily_target: default_daily_target(),
        volume: default_volume(),
        tick_ms: default_tick_ms(),
        track_secs: default_track_secs(),
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_daily_reset() -> bool {
    true
}

fn default_daily_target() -> u32 {
    DEFAULT_VERSES_PER_DAY
}

fn default_volume() -> f32 {
    1.0
}

fn default_tick_ms() -> u64 {
    250
}

fn default_track_secs() -> u64 {
    8
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            api: default_api(),
            storage: default_storage(),
            player: default_player(),
        }
    }
}
