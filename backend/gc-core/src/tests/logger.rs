use crate::config::GcConfig;
use crate::logger::{self, DISPATCH_TARGET, LOG_FILE_NAME, LogOptions};

use log::{Level, LevelFilter, Log, Record};
use serial_test::serial;
use tempfile::TempDir;

/// **VALUE**: Verifies the logger can be initialized repeatedly without error.
///
/// **WHY THIS MATTERS**: Hosts and tests both call `initialize`; the global logger can
/// only be installed once, and a second install must not fail the host's startup.
///
/// **BUG THIS CATCHES**: Would catch the guard being removed, which surfaces as
/// "attempted to set a logger after the logging system was already initialized".
#[test]
#[serial]
fn given_logger_when_initialized_twice_then_both_calls_succeed() {
    // GIVEN: Options writing to a temp directory
    let dir = TempDir::new().unwrap();
    let options = LogOptions::new(LevelFilter::Debug)
        .with_log_dir(dir.path())
        .without_stdout();

    // WHEN: Initializing twice, the second time with different options
    let first = logger::initialize(&options);
    let second = logger::initialize(&LogOptions::new(LevelFilter::Trace));

    // THEN: Both succeed
    assert!(first.is_ok(), "First init failed: {first:?}");
    assert!(second.is_ok(), "Second init failed: {second:?}");
}

/// **VALUE**: Tests that dispatch traces are filtered by their own level while the
/// rest of the client logs at the main level.
///
/// **WHY THIS MATTERS**: A welcome snapshot or cache resubscribe produces a line per
/// message; hosts need session events without drowning in dispatch traffic.
///
/// **BUG THIS CATCHES**: Would catch the dispatch level being ignored, or applied to
/// every target instead of the dispatcher module.
#[test]
fn given_quiet_dispatch_level_when_logging_then_only_dispatch_traces_dropped() {
    // GIVEN: Debug overall, warnings only for the dispatcher, file output only
    let dir = TempDir::new().unwrap();
    let options = LogOptions::new(LevelFilter::Debug)
        .with_dispatch_level(LevelFilter::Warn)
        .with_log_dir(dir.path())
        .without_stdout();
    let (_, log) = logger::build_dispatch(&options).unwrap().into_log();

    // WHEN: Logging a dispatch trace and a session event at debug
    log.log(
        &Record::builder()
            .args(format_args!("Dispatching ClientWelcome (12 bytes)"))
            .level(Level::Debug)
            .target("gc_core::dispatcher::handlers")
            .build(),
    );
    log.log(
        &Record::builder()
            .args(format_args!("Handshake retry in 2s"))
            .level(Level::Debug)
            .target("gc_core::session")
            .build(),
    );
    log.flush();

    // THEN: Only the session line reached the file
    let contents = std::fs::read_to_string(dir.path().join(LOG_FILE_NAME)).unwrap();
    assert!(contents.contains("gc_core::session: Handshake retry in 2s"));
    assert!(!contents.contains("Dispatching"), "Unexpected: {contents}");
    assert!(DISPATCH_TARGET.starts_with("gc_core::"));
}

/// **VALUE**: Verifies log options follow the levels in `gc.json`.
///
/// **BUG THIS CATCHES**: Would catch the config levels being ignored in favor of a
/// build-profile default.
#[test]
fn given_config_levels_when_options_derived_then_levels_applied() {
    // GIVEN: A config asking for warn overall and trace for dispatch
    let config = GcConfig {
        log_level: String::from("warn"),
        dispatch_log_level: String::from("TRACE"),
        ..Default::default()
    };

    // WHEN: Deriving options
    let options = LogOptions::from_config(&config);

    // THEN: Both levels carried over, stdout on, no file
    assert_eq!(options.level, LevelFilter::Warn);
    assert_eq!(options.dispatch_level, LevelFilter::Trace);
    assert!(options.stdout);
    assert_eq!(options.log_dir, None);
}
