//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity, DefaultLogger and the global
//! logger slot. Tests that swap the global logger or the severity filter are
//! marked #[serial] and filter captured entries by their own source.

use crate::log::{self, Logger, LogEntry, LogSeverity, DefaultLogger};
use serial_test::serial;
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Test logger that captures entries for one source
struct CaptureLogger {
    source: &'static str,
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CaptureLogger {
    fn new(source: &'static str) -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { source, entries: Arc::clone(&entries) }, entries)
    }
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        if entry.source == self.source {
            self.entries.lock().unwrap().push(entry.clone());
        }
    }
}

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "culling::Test".to_string(),
        message: format!("{:?} message", severity),
        file,
        line,
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_u8_roundtrip() {
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        assert_eq!(LogSeverity::from_u8(severity as u8), severity);
    }
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_format_without_file_line() {
    let line = DefaultLogger::format_entry(&entry(LogSeverity::Info, None, None));
    assert!(line.contains("culling::Test"));
    assert!(line.contains("Info message"));
    assert!(!line.contains("("));
}

#[test]
fn test_default_logger_format_with_file_line() {
    let line = DefaultLogger::format_entry(&entry(LogSeverity::Error, Some("scene.rs"), Some(42)));
    assert!(line.contains("Error message"));
    assert!(line.contains("(scene.rs:42)"));
}

#[test]
fn test_default_logger_all_severities() {
    let logger = DefaultLogger;
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        // Just verify it doesn't panic
        logger.log(&entry(severity, None, None));
    }
}

#[test]
fn test_logger_trait_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<DefaultLogger>();
}

// ============================================================================
// GLOBAL LOGGER TESTS
// ============================================================================

#[test]
#[serial]
fn test_set_logger_receives_macro_output() {
    let (logger, entries) = CaptureLogger::new("culling::LogTest::macro");
    log::set_logger(logger);

    crate::cull_info!("culling::LogTest::macro", "{} of {} visible", 3, 10);
    crate::cull_warn!("culling::LogTest::macro", "camera degenerate");

    log::reset_logger();

    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].severity, LogSeverity::Info);
    assert_eq!(entries[0].message, "3 of 10 visible");
    assert_eq!(entries[1].severity, LogSeverity::Warn);
    assert!(entries[0].file.is_none());
}

#[test]
#[serial]
fn test_error_macro_records_location() {
    let (logger, entries) = CaptureLogger::new("culling::LogTest::error");
    log::set_logger(logger);

    crate::cull_error!("culling::LogTest::error", "bad buffer");

    log::reset_logger();

    let entries = entries.lock().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].severity, LogSeverity::Error);
    assert!(entries[0].file.unwrap().ends_with("log_tests.rs"));
    assert!(entries[0].line.is_some());
}

#[test]
#[serial]
fn test_min_severity_filters_entries() {
    let (logger, entries) = CaptureLogger::new("culling::LogTest::filter");
    log::set_logger(logger);

    assert_eq!(log::min_severity(), LogSeverity::Info);
    crate::cull_debug!("culling::LogTest::filter", "dropped");
    crate::cull_trace!("culling::LogTest::filter", "dropped");

    log::set_min_severity(LogSeverity::Trace);
    crate::cull_debug!("culling::LogTest::filter", "kept debug");
    crate::cull_trace!("culling::LogTest::filter", "kept trace");

    log::set_min_severity(LogSeverity::Error);
    crate::cull_warn!("culling::LogTest::filter", "dropped");

    log::set_min_severity(LogSeverity::Info);
    log::reset_logger();

    let entries = entries.lock().unwrap();
    let messages: Vec<&str> = entries.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["kept debug", "kept trace"]);
}

#[test]
#[serial]
fn test_reset_logger_detaches_custom_logger() {
    let (logger, entries) = CaptureLogger::new("culling::LogTest::reset");
    log::set_logger(logger);
    log::reset_logger();

    crate::cull_info!("culling::LogTest::reset", "goes to console");

    assert!(entries.lock().unwrap().is_empty());
}
