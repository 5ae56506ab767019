//! File logging for the TUI.
//!
//! The terminal is owned by the UI, so log lines never go to stdout or
//! stderr. Without a configured file no subscriber is installed and the
//! `tracing` macros stay inert.

use std::path::{Path, PathBuf};

use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::model::config::LogConfig;

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("invalid log filter \"{filter}\": {source}")]
    Filter {
        filter: String,
        source: tracing_subscriber::filter::ParseError,
    },
    #[error("log file path has no file name: {0}")]
    BadPath(PathBuf),
    #[error("could not create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Filter directive for `-v` counts, falling back to the configured level
pub fn level_for_verbosity(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Build the filter: RUST_LOG wins, then `level`
pub fn build_filter(level: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| LoggingError::Filter {
            filter: level.to_string(),
            source: e,
        })
}

/// Install the file subscriber. The returned guard flushes pending lines
/// when dropped, so keep it alive until the app exits.
pub fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>, LoggingError> {
    let Some(path) = config.file.as_deref() else {
        return Ok(None);
    };
    let filter = build_filter(&config.level)?;
    let (dir, file_name) = split_log_path(path)?;
    std::fs::create_dir_all(&dir).map_err(|e| LoggingError::CreateDir {
        path: dir.clone(),
        source: e,
    })?;

    let appender = tracing_appender::rolling::never(&dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let init_result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .try_init();

    if let Err(err) = init_result {
        debug!(error = %err, "tracing subscriber already set, continuing");
    }
    debug!(path = %path.display(), "logging started");

    Ok(Some(guard))
}

fn split_log_path(path: &Path) -> Result<(PathBuf, &std::ffi::OsStr), LoggingError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| LoggingError::BadPath(path.to_path_buf()))?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok((dir, file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_level() {
        assert_eq!(level_for_verbosity(0, "warn"), "warn");
        assert_eq!(level_for_verbosity(1, "warn"), "debug");
        assert_eq!(level_for_verbosity(4, "warn"), "trace");
    }

    #[test]
    fn log_path_splits_into_dir_and_name() {
        let (dir, name) = split_log_path(Path::new("/tmp/logs/tasks.log")).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/logs"));
        assert_eq!(name, "tasks.log");

        let (dir, name) = split_log_path(Path::new("tasks.log")).unwrap();
        assert_eq!(dir, PathBuf::from("."));
        assert_eq!(name, "tasks.log");
    }

    #[test]
    fn root_path_has_no_file_name() {
        assert!(matches!(
            split_log_path(Path::new("/")),
            Err(LoggingError::BadPath(_))
        ));
    }

    #[test]
    fn no_file_means_no_subscriber() {
        let guard = init_logging(&LogConfig::default()).unwrap();
        assert!(guard.is_none());
    }
}
