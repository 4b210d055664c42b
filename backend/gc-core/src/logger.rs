//! Logging for hosts embedding the GC client.
//!
//! The host decides verbosity and outputs through [`LogOptions`], usually derived from
//! [`GcConfig`]. Dispatch traces (one line per GC message) get their own level so a
//! full inventory sync can stay quiet while session events are still logged.

use crate::config::GcConfig;
use crate::error::CoreError;

use common::ErrorLocation;

use std::io::stdout;
use std::panic::Location;
use std::path::PathBuf;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

static INIT_LOGGER_ONCE: Once = Once::new();

static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

pub const LOG_FILE_NAME: &str = "gc-core.log";

/// Log target prefix of the per-message dispatch traces.
pub const DISPATCH_TARGET: &str = "gc_core::dispatcher";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogOptions {
    pub level: LevelFilter,
    pub dispatch_level: LevelFilter,
    pub stdout: bool,
    /// `None` disables the log file.
    pub log_dir: Option<PathBuf>,
}

impl LogOptions {
    pub fn new(level: LevelFilter) -> Self {
        Self {
            level,
            dispatch_level: level,
            stdout: true,
            log_dir: None,
        }
    }

    /// Levels from `log_level` / `dispatch_log_level`, stdout only.
    pub fn from_config(config: &GcConfig) -> Self {
        Self {
            dispatch_level: config.dispatch_log_level_filter(),
            ..Self::new(config.log_level_filter())
        }
    }

    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(log_dir.into());
        self
    }

    pub fn with_dispatch_level(mut self, level: LevelFilter) -> Self {
        self.dispatch_level = level;
        self
    }

    pub fn without_stdout(mut self) -> Self {
        self.stdout = false;
        self
    }
}

/// Install the global logger described by `options`.
///
/// Only the first call installs anything; later calls log a warning and return Ok,
/// whatever options they pass.
///
/// # Errors
///
/// Returns [`CoreError::Logger`] if the log file cannot be created or another
/// global logger is already installed.
pub fn initialize(options: &LogOptions) -> Result<(), CoreError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("Logger already initialized, ignoring {options:?}");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = build_dispatch(options).and_then(|dispatch| {
            dispatch.apply().map_err(|e| CoreError::Logger {
                message: format!("Failed to install logger: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })
        });
        if result.is_ok() {
            info!(
                "GC client logging at {:?} (dispatch traces at {:?})",
                options.level, options.dispatch_level
            );
        }
    });

    result
}

/// Build the dispatch without installing it.
#[track_caller]
pub fn build_dispatch(options: &LogOptions) -> Result<Dispatch, CoreError> {
    let mut dispatch = Dispatch::new()
        .level(options.level)
        .level_for(DISPATCH_TARGET, options.dispatch_level);

    if options.stdout {
        let colors = ColoredLevelConfig::new()
            .debug(Blue)
            .info(Green)
            .warn(Yellow)
            .error(Red)
            .trace(Magenta);

        dispatch = dispatch.chain(
            Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "[{date} - {level}] {message} [{target}]",
                        date = format_rfc3339(SystemTime::now()),
                        level = colors.color(record.level()),
                        target = record.target(),
                    ))
                })
                .chain(stdout()),
        );
    }

    if let Some(log_dir) = &options.log_dir {
        let log_file_path = log_dir.join(LOG_FILE_NAME);
        let log_file = fern::log_file(&log_file_path).map_err(|e| CoreError::Logger {
            message: format!("Failed to create log file {}: {e}", log_file_path.display()),
            location: ErrorLocation::from(Location::caller()),
        })?;

        dispatch = dispatch.chain(
            Dispatch::new()
                .format(|out, message, record| {
                    out.finish(format_args!(
                        "[{date} - {level}] {target}: {message} [{file}:{line}]",
                        date = format_rfc3339(SystemTime::now()),
                        level = record.level(),
                        target = record.target(),
                        file = record.file().unwrap_or("unknown"),
                        line = record.line().unwrap_or(0)
                    ))
                })
                .chain(log_file),
        );
    }

    Ok(dispatch)
}
