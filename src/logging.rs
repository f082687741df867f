use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Env var that points logging at a file, overriding the config.
pub const LOG_FILE_ENV: &str = "USERLIST_LOG";

/// Resolve where logs should go: `USERLIST_LOG` wins over the config file.
pub fn log_file_path(config: &LoggingConfig) -> Option<PathBuf> {
    std::env::var_os(LOG_FILE_ENV)
        .map(PathBuf::from)
        .or_else(|| config.file.clone())
}

/// Build the filter: `RUST_LOG` when set, otherwise the configured directive.
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initialize tracing.
///
/// Logs never go to stdout, which belongs to the interactive view. With a
/// log file configured they are appended there, otherwise they go to stderr.
pub fn init_tracing(config: &LoggingConfig) {
    let filter = build_filter(config);

    match log_file_path(config) {
        Some(path) => match open_log_file(&path) {
            Ok(file) => {
                let file_layer = fmt::layer()
                    .with_writer(std::sync::Mutex::new(file))
                    .with_ansi(false)
                    .with_target(true)
                    .with_level(true)
                    .with_timer(fmt::time::UtcTime::rfc_3339());

                tracing_subscriber::registry()
                    .with(filter)
                    .with(file_layer)
                    .init();
            }
            Err(e) => {
                eprintln!("Warning: Failed to open log file {}: {}", path.display(), e);
                init_stderr(filter);
            }
        },
        None => init_stderr(filter),
    }
}

fn init_stderr(filter: EnvFilter) {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}

fn open_log_file(path: &Path) -> std::io::Result<std::fs::File> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_file_is_used_without_env_override() {
        if std::env::var_os(LOG_FILE_ENV).is_some() {
            return;
        }
        let config = LoggingConfig {
            filter: "debug".to_string(),
            file: Some(PathBuf::from("/tmp/userlist-test.log")),
        };
        assert_eq!(
            log_file_path(&config),
            Some(PathBuf::from("/tmp/userlist-test.log"))
        );
    }

    #[test]
    fn no_file_means_stderr() {
        if std::env::var_os(LOG_FILE_ENV).is_some() {
            return;
        }
        assert_eq!(log_file_path(&LoggingConfig::default()), None);
    }
}
