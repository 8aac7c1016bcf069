//! Configuration for the todomaster application.
//!
//! Settings live in `config.json` inside the platform data directory (see
//! [`DataStorage`]). A missing file is not an error: defaults are used, so the
//! tool works with no setup at all.
//!
//! ## Database location
//!
//! The database path is resolved with this precedence:
//!
//! 1. the `--db` command-line option
//! 2. the `TODOMASTER_DB` environment variable
//! 3. `db_path` from `config.json`
//! 4. `tasks.db` in the data directory
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todomaster::libs::config::Config;
//! use todomaster::libs::data_storage::DataStorage;
//!
//! let storage = DataStorage::new();
//! let config = Config::read_from(&storage)?;
//! let db_path = config.db_path(None, &storage)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use anyhow::Result;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DB_FILE_NAME: &str = "tasks.db";
pub const DB_PATH_ENV: &str = "TODOMASTER_DB";
pub const DEFAULT_BUSY_TIMEOUT_SECS: u64 = 5;

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Explicit database file. Falls back to `tasks.db` in the data directory.
    pub db_path: Option<PathBuf>,

    /// How long a write waits for another process's lock before giving up.
    pub busy_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: None,
            busy_timeout_secs: DEFAULT_BUSY_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Resolves the database file path. See the module docs for precedence.
    pub fn db_path(&self, cli_override: Option<PathBuf>, storage: &DataStorage) -> Result<PathBuf> {
        if let Some(path) = cli_override {
            return Ok(path);
        }
        if let Some(path) = std::env::var_os(DB_PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        if let Some(path) = &self.db_path {
            return Ok(path.clone());
        }
        Ok(storage.get_path(DB_FILE_NAME)?)
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_secs(self.busy_timeout_secs)
    }
}
