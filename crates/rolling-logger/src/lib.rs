//! Rolling Logger
//!
//! Installs a `tracing` subscriber that writes to a size-capped log file
//! (`<app>.log`, rotated to `<app>.log.1`, `<app>.log.2`, ...) and to stderr,
//! and keeps the most recent lines in a circular buffer for in-app display.
//! `log` records are bridged into the same subscriber.

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

mod buffer;
mod file;

pub use buffer::RecentLines;
pub use file::{RollingFile, RollingWriter};

/// Default size cap of a single log file
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;
/// Default number of rotated files kept beside the live one
pub const DEFAULT_MAX_FILES: usize = 3;
/// Default number of lines kept in memory
pub const DEFAULT_BUFFER_LINES: usize = 500;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    #[error("Failed to open log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Logger already initialized")]
    AlreadyInitialized,
    #[error("Failed to install subscriber: {0}")]
    Subscriber(String),
}

/// Logger settings
#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub dir: PathBuf,
    pub app_name: String,
    pub max_bytes: u64,
    pub max_files: usize,
    pub buffer_lines: usize,
    /// Filter used when `RUST_LOG` is not set
    pub default_filter: String,
}

impl LoggerConfig {
    pub fn new(dir: impl Into<PathBuf>, app_name: &str) -> Self {
        Self {
            dir: dir.into(),
            app_name: app_name.to_string(),
            max_bytes: DEFAULT_MAX_BYTES,
            max_files: DEFAULT_MAX_FILES,
            buffer_lines: DEFAULT_BUFFER_LINES,
            default_filter: "info".to_string(),
        }
    }
}

static RECENT: OnceLock<Arc<RecentLines>> = OnceLock::new();

/// Initialize logging into `log_dir` with default settings
pub fn init_logger(log_dir: impl Into<PathBuf>, app_name: &str) -> Result<(), LoggerError> {
    init_logger_with(LoggerConfig::new(log_dir, app_name))
}

/// Initialize logging. Only the first call in a process succeeds.
pub fn init_logger_with(config: LoggerConfig) -> Result<(), LoggerError> {
    if RECENT.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }

    let recent = Arc::new(RecentLines::new(config.buffer_lines));
    let file = RollingFile::open(
        &config.dir,
        &config.app_name,
        config.max_bytes,
        config.max_files,
    )?;
    let writer = RollingWriter::new(file, Some(recent.clone()));

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| LoggerError::Subscriber(e.to_string()))?;

    RECENT
        .set(recent)
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    tracing::info!(
        dir = %config.dir.display(),
        app = %config.app_name,
        started = %chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        "Logger initialized"
    );
    Ok(())
}

/// Most recent log lines, oldest first
pub fn recent_lines() -> Vec<String> {
    RECENT.get().map(|recent| recent.lines()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test only: the subscriber is process-wide.
    #[test]
    fn test_init_once_and_capture_log_records() {
        assert!(recent_lines().is_empty());

        let dir = tempfile::tempdir().unwrap();
        let mut config = LoggerConfig::new(dir.path(), "board-test");
        config.default_filter = "debug".to_string();
        init_logger_with(config.clone()).unwrap();

        log::warn!("bridged from log");
        tracing::warn!("direct warning");

        let lines = recent_lines();
        assert!(lines.iter().any(|line| line.contains("bridged from log")));
        assert!(lines.iter().any(|line| line.contains("direct warning")));
        assert!(dir.path().join("board-test.log").exists());

        assert!(matches!(
            init_logger_with(config),
            Err(LoggerError::AlreadyInitialized)
        ));
    }
}
