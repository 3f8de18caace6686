use super::{init_logging, log_debug, log_debug_content, log_file_path, set_logging_for_tests};
use crate::config::AppConfig;
use clap::Parser;
use std::env;
use std::sync::{Mutex, OnceLock};

static LOG_TEST_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn with_log_lock(action: impl FnOnce()) {
    let _guard = LOG_TEST_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    env::remove_var("TRICORDER_LOGS");
    env::remove_var("TRICORDER_NO_LOGS");
    env::remove_var("TRICORDER_LOG_CONTENT");
    let _ = std::fs::remove_file(log_file_path());
    action();
    set_logging_for_tests(false, false);
}

#[test]
fn log_paths_live_in_temp_dir() {
    assert!(log_file_path().starts_with(env::temp_dir()));
    assert!(log_file_path().ends_with("tricorder_tui.log"));
    assert!(super::crash_log_path().ends_with("tricorder_crash.log"));
}

#[test]
fn logging_disabled_by_default() {
    with_log_lock(|| {
        let config = AppConfig::parse_from(["tricorder"]);
        init_logging(&config);
        log_debug("should-not-write");
        let contents = std::fs::read_to_string(log_file_path()).unwrap_or_default();
        assert!(!contents.contains("should-not-write"));
    });
}

#[test]
fn logging_enabled_writes_log() {
    with_log_lock(|| {
        let config = AppConfig::parse_from(["tricorder", "--logs"]);
        init_logging(&config);
        log_debug("log-enabled");
        let contents = std::fs::read_to_string(log_file_path()).expect("log file should exist");
        assert!(contents.contains("log-enabled"));
    });
}

#[test]
fn no_logs_flag_wins_over_logs() {
    with_log_lock(|| {
        let config = AppConfig::parse_from(["tricorder", "--logs", "--no-logs"]);
        init_logging(&config);
        log_debug("suppressed-line");
        let contents = std::fs::read_to_string(log_file_path()).unwrap_or_default();
        assert!(!contents.contains("suppressed-line"));
    });
}

#[test]
fn log_content_requires_flag() {
    with_log_lock(|| {
        let config = AppConfig::parse_from(["tricorder", "--logs"]);
        init_logging(&config);
        log_debug_content("reading=21.5C");
        let contents = std::fs::read_to_string(log_file_path()).unwrap_or_default();
        assert!(!contents.contains("reading=21.5C"));

        let config = AppConfig::parse_from(["tricorder", "--logs", "--log-content"]);
        init_logging(&config);
        log_debug_content("reading=22.0C");
        let contents = std::fs::read_to_string(log_file_path()).unwrap_or_default();
        assert!(contents.contains("reading=22.0C"));
    });
}
