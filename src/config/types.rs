use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositoryConfig,
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// In-memory repository settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Simulated latency of `list` in milliseconds (default: 1000).
    #[serde(default = "default_list_delay_ms")]
    pub list_delay_ms: u64,
    /// Simulated latency of `add`, `remove` and `clear` in milliseconds (default: 500).
    #[serde(default = "default_mutation_delay_ms")]
    pub mutation_delay_ms: u64,
    /// Users present when the repository is created.
    #[serde(default)]
    pub seed: Vec<SeedUser>,
}

/// A user entry pre-loaded into the repository. Ids are generated on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedUser {
    pub name: String,
    pub email: String,
}

/// Intent loop settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Dispatch `LoadUsers` as soon as the loop starts (default: true).
    #[serde(default = "default_load_on_start")]
    pub load_on_start: bool,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Write logs to this file instead of stderr.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_list_delay_ms() -> u64 {
    1000
}

fn default_mutation_delay_ms() -> u64 {
    500
}

fn default_load_on_start() -> bool {
    true
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            list_delay_ms: default_list_delay_ms(),
            mutation_delay_ms: default_mutation_delay_ms(),
            seed: Vec::new(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            load_on_start: default_load_on_start(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            file: None,
        }
    }
}
