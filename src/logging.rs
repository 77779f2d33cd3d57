use std::fs::{File, OpenOptions};
use std::sync::Mutex;
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

/// Default log level when not specified
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Default log file path (no logging to file)
pub const DEFAULT_LOG_FILE: &str = "/dev/null";

#[derive(Error, Debug)]
pub enum LogError {
    #[error("Failed to open log file {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to set tracing subscriber: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),

    #[error("Failed to change log level: {0}")]
    Reload(#[from] reload::Error),
}

/// Parse a level name, falling back to info
pub fn parse_level(log_level: &str) -> LevelFilter {
    match log_level.trim().to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        "off" => LevelFilter::OFF,
        _ => LevelFilter::INFO,
    }
}

/// Runtime control over the installed log filter
#[derive(Clone)]
pub struct LogHandle {
    filter: reload::Handle<EnvFilter, Registry>,
    base: LevelFilter,
}

impl LogHandle {
    /// Raise the filter to debug, or restore the configured level
    pub fn set_debug(&self, enabled: bool) -> Result<(), LogError> {
        let level = if enabled && self.base < LevelFilter::DEBUG {
            LevelFilter::DEBUG
        } else {
            self.base
        };
        self.filter
            .modify(|filter| *filter = EnvFilter::default().add_directive(level.into()))?;
        tracing::debug!("LOG: level set to {}", level);
        Ok(())
    }

    pub fn base_level(&self) -> LevelFilter {
        self.base
    }
}

fn build(
    level: LevelFilter,
    file: File,
) -> (impl tracing::Subscriber + Send + Sync + 'static, LogHandle) {
    let (filter, handle) = reload::Layer::new(EnvFilter::default().add_directive(level.into()));
    let subscriber = tracing_subscriber::registry().with(filter).with(
        fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false),
    );
    (
        subscriber,
        LogHandle {
            filter: handle,
            base: level,
        },
    )
}

/// Install the global subscriber, writing to `log_file` with ANSI off
pub fn init_logging(log_level: &str, log_file: &str) -> Result<LogHandle, LogError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|source| LogError::Open {
            path: log_file.to_string(),
            source,
        })?;
    let (subscriber, handle) = build(parse_level(log_level), file);
    subscriber.try_init()?;
    Ok(handle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), LevelFilter::DEBUG);
        assert_eq!(parse_level(" warn "), LevelFilter::WARN);
        assert_eq!(parse_level("verbose"), LevelFilter::INFO);
    }

    #[test]
    fn test_set_debug_raises_and_restores_level() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cmdr.log");
        let file = File::create(&path).unwrap();
        let (subscriber, handle) = build(LevelFilter::INFO, file);

        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("hidden before toggle");
            handle.set_debug(true).unwrap();
            tracing::debug!("visible after toggle");
            handle.set_debug(false).unwrap();
            tracing::debug!("hidden after restore");
        });

        let content = fs::read_to_string(&path).unwrap();
        assert!(!content.contains("hidden before toggle"));
        assert!(content.contains("visible after toggle"));
        assert!(!content.contains("hidden after restore"));
    }

    #[test]
    fn test_set_debug_keeps_more_verbose_base() {
        let dir = tempfile::tempdir().unwrap();
        let file = File::create(dir.path().join("cmdr.log")).unwrap();
        let (_subscriber, handle) = build(LevelFilter::TRACE, file);
        assert_eq!(handle.base_level(), LevelFilter::TRACE);
        handle.set_debug(true).unwrap();
    }

    #[test]
    fn test_init_with_unwritable_path_fails() {
        let result = init_logging("info", "/nonexistent-dir/cmdr.log");
        assert!(matches!(result, Err(LogError::Open { .. })));
    }
}
