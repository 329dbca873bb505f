//! Subscriber setup for the default `tracing` backend.
//!
//! The facade delegates all output to the backend; when the backend is
//! [`TracingBackend`](crate::TracingBackend), somebody still has to install
//! a `tracing` subscriber. This module wires up the usual one: an env
//! filter, a non-blocking file writer and a stdout writer. Applications
//! that already configure `tracing` themselves can skip it entirely.

use std::fs;
use std::io;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Keeps the non-blocking file writer alive.
///
/// Dropping the guard flushes and closes the log file, so it must live for
/// the duration of the program.
pub struct SubscriberGuard {
    _file_guard: WorkerGuard,
}

/// Default directory for log files.
pub fn default_log_dir() -> &'static str {
    "logs"
}

/// Default log file name.
pub fn default_log_file() -> &'static str {
    "typelog.log"
}

/// Initializes the global `tracing` subscriber.
///
/// Creates `log_dir` if missing, truncates any previous `log_file`, then
/// installs a subscriber writing to both the file (without ANSI colors)
/// and stdout. The filter comes from the `RUST_LOG` environment variable,
/// defaulting to `info`.
///
/// Call this at most once per process; the subscriber is global.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or the log
/// file cannot be truncated.
pub fn init_subscriber(log_dir: &str, log_file: &str) -> Result<SubscriberGuard, io::Error> {
    fs::create_dir_all(log_dir)?;

    // Each session starts with an empty file.
    let log_path = Path::new(log_dir).join(log_file);
    fs::write(&log_path, "")?;

    let file_appender = tracing_appender::rolling::never(log_dir, log_file);
    let (non_blocking_file, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stdout)
        .with_ansi(true);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Ok(SubscriberGuard {
        _file_guard: file_guard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        assert_eq!(default_log_dir(), "logs");
        assert_eq!(default_log_file(), "typelog.log");
    }

    // init_subscriber itself can only run once per process because the
    // subscriber is global, so the tests below cover the file handling it
    // performs before installing it.

    #[test]
    fn test_log_file_is_created_in_nested_directory() {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        let log_dir = root.path().join("deep").join("logs");
        let log_dir_str = log_dir.to_str().unwrap();

        fs::create_dir_all(log_dir_str).expect("Failed to create directory");
        let log_path = log_dir.join("test.log");
        fs::write(&log_path, "").expect("Failed to create log file");

        assert!(log_path.exists(), "Log file should be created");
        assert_eq!(fs::read_to_string(&log_path).unwrap(), "");
    }

    #[test]
    fn test_previous_log_file_is_truncated() {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        let log_path = root.path().join("test.log");

        fs::write(&log_path, "stale session data").expect("Failed to write test data");
        fs::write(&log_path, "").expect("Failed to truncate log file");

        assert_eq!(
            fs::read_to_string(&log_path).unwrap(),
            "",
            "File should be truncated"
        );
    }

    #[test]
    fn test_unwritable_directory_is_an_error() {
        #[cfg(unix)]
        let result = fs::create_dir_all("/proc/forbidden/logs");

        #[cfg(windows)]
        let result = fs::create_dir_all("C:\\Windows\\System32\\forbidden\\logs");

        assert!(
            result.is_err(),
            "Should return error for an unwritable log directory"
        );
    }
}
