use crate::error::config::{ConfigAction, ConfigError};
use crate::{CSGO_APP_ID, DEFAULT_CLIENT_VERSION};

use common::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use log::{LevelFilter, info, warn};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "gc.json";

/// Tunables of the GC client. Every field falls back to its default when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GcConfig {
    #[serde(default = "default_app_id")]
    pub app_id: u32,
    /// Version sent in `ClientHello`.
    #[serde(default = "default_client_version")]
    pub client_version: u32,
    #[serde(default = "default_hello_delay_ms")]
    pub hello_delay_ms: u64,
    #[serde(default = "default_backoff_initial_ms")]
    pub backoff_initial_ms: u64,
    #[serde(default = "default_backoff_max_ms")]
    pub backoff_max_ms: u64,
    #[serde(default = "default_inspect_timeout_ms")]
    pub inspect_timeout_ms: u64,
    #[serde(default = "default_profile_timeout_ms")]
    pub profile_timeout_ms: u64,
    #[serde(default = "default_casket_timeout_ms")]
    pub casket_timeout_ms: u64,
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
    /// `off`, `error`, `warn`, `info`, `debug` or `trace`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Level of the per-message dispatch traces.
    #[serde(default = "default_log_level")]
    pub dispatch_log_level: String,
}

impl Default for GcConfig {
    fn default() -> Self {
        Self {
            app_id: default_app_id(),
            client_version: default_client_version(),
            hello_delay_ms: default_hello_delay_ms(),
            backoff_initial_ms: default_backoff_initial_ms(),
            backoff_max_ms: default_backoff_max_ms(),
            inspect_timeout_ms: default_inspect_timeout_ms(),
            profile_timeout_ms: default_profile_timeout_ms(),
            casket_timeout_ms: default_casket_timeout_ms(),
            event_capacity: default_event_capacity(),
            log_level: default_log_level(),
            dispatch_log_level: default_log_level(),
        }
    }
}

fn default_app_id() -> u32 {
    CSGO_APP_ID
}
fn default_client_version() -> u32 {
    DEFAULT_CLIENT_VERSION
}
fn default_hello_delay_ms() -> u64 {
    500
}
fn default_backoff_initial_ms() -> u64 {
    1000
}
fn default_backoff_max_ms() -> u64 {
    60_000
}
fn default_inspect_timeout_ms() -> u64 {
    10_000
}
fn default_profile_timeout_ms() -> u64 {
    10_000
}
fn default_casket_timeout_ms() -> u64 {
    30_000
}
fn default_event_capacity() -> usize {
    256
}
fn default_log_level() -> String {
    String::from("info")
}

impl GcConfig {
    /// Load config from {config_dir}/gc.json, or defaults if the file is missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read, parsed or validated.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!("No GC config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)
            .map_err(|e| io_error(ConfigAction::Read, &config_path, e))?;

        let config: GcConfig = serde_json::from_str(&contents).map_err(|e| {
            warn!("Malformed GC config {}: {e}", config_path.display());
            ConfigError::Parse {
                path: config_path.clone(),
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        config.validate()?;

        info!(
            "GC config loaded from {} (app {}, client version {})",
            config_path.display(),
            config.app_id,
            config.client_version
        );
        Ok(config)
    }

    /// Save config to {config_dir}/gc.json through a temp file and rename.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir)
            .map_err(|e| io_error(ConfigAction::CreateDir, config_dir, e))?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{CONFIG_FILE_NAME}.tmp"));

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::Serialize {
            reason: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        std::fs::write(&temp_path, json)
            .map_err(|e| io_error(ConfigAction::WriteTemp, &temp_path, e))?;
        std::fs::rename(&temp_path, &config_path)
            .map_err(|e| io_error(ConfigAction::Replace, &config_path, e))?;

        info!("GC config saved to {}", config_path.display());
        Ok(())
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let timeouts = [
            ("inspect_timeout_ms", self.inspect_timeout_ms),
            ("profile_timeout_ms", self.profile_timeout_ms),
            ("casket_timeout_ms", self.casket_timeout_ms),
            ("backoff_initial_ms", self.backoff_initial_ms),
        ];

        if let Some((field, _)) = timeouts.into_iter().find(|(_, value)| *value == 0) {
            return Err(invalid(field, String::from("must be greater than zero")));
        }

        if self.backoff_initial_ms > self.backoff_max_ms {
            return Err(invalid(
                "backoff_initial_ms",
                format!(
                    "({}) exceeds backoff_max_ms ({})",
                    self.backoff_initial_ms, self.backoff_max_ms
                ),
            ));
        }

        if self.event_capacity == 0 {
            return Err(invalid(
                "event_capacity",
                String::from("must be greater than zero"),
            ));
        }

        for (field, level) in [
            ("log_level", &self.log_level),
            ("dispatch_log_level", &self.dispatch_log_level),
        ] {
            if LevelFilter::from_str(level).is_err() {
                return Err(invalid(field, format!("'{level}' is not a log level")));
            }
        }

        Ok(())
    }

    /// `log_level` as a filter; `Info` if it does not parse.
    pub fn log_level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn dispatch_log_level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.dispatch_log_level).unwrap_or(LevelFilter::Info)
    }

    pub fn hello_delay(&self) -> Duration {
        Duration::from_millis(self.hello_delay_ms)
    }

    pub fn backoff_initial(&self) -> Duration {
        Duration::from_millis(self.backoff_initial_ms)
    }

    pub fn backoff_max(&self) -> Duration {
        Duration::from_millis(self.backoff_max_ms)
    }

    pub fn inspect_timeout(&self) -> Duration {
        Duration::from_millis(self.inspect_timeout_ms)
    }

    pub fn profile_timeout(&self) -> Duration {
        Duration::from_millis(self.profile_timeout_ms)
    }

    pub fn casket_timeout(&self) -> Duration {
        Duration::from_millis(self.casket_timeout_ms)
    }
}

#[track_caller]
fn io_error(action: ConfigAction, path: &Path, source: std::io::Error) -> ConfigError {
    warn!("Cannot {action} {}: {source}", path.display());
    ConfigError::Io {
        action,
        path: PathBuf::from(path),
        source,
        location: ErrorLocation::from(Location::caller()),
    }
}

#[track_caller]
fn invalid(field: &'static str, reason: String) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason,
        location: ErrorLocation::from(Location::caller()),
    }
}
