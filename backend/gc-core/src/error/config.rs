use std::fmt;
use std::path::PathBuf;

use common::ErrorLocation;
use thiserror::Error;

/// File operation that failed while loading or saving `gc.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    Read,
    CreateDir,
    WriteTemp,
    Replace,
}

impl fmt::Display for ConfigAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Read => "read",
            Self::CreateDir => "create directory",
            Self::WriteTemp => "write temp file",
            Self::Replace => "replace",
        })
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config Io Error: cannot {action} {path}: {source} {location}")]
    Io {
        action: ConfigAction,
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Config Parse Error: {path}: {reason} {location}")]
    Parse {
        path: PathBuf,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Config Serialization Error: {reason} {location}")]
    Serialize {
        reason: String,
        location: ErrorLocation,
    },

    /// `field` names the offending `gc.json` key.
    #[error("Config Invalid Error: {field} {reason} {location}")]
    Invalid {
        field: &'static str,
        reason: String,
        location: ErrorLocation,
    },
}
