//! Store configuration.
//!
//! Values come from the environment, optionally seeded from a `.env` file.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const DB_PATH_VAR: &str = "CONTACTS_DB_PATH";
pub const BUSY_TIMEOUT_VAR: &str = "CONTACTS_BUSY_TIMEOUT_MS";

const DEFAULT_DB_FILE: &str = "contacts.db";
const DEFAULT_DATA_DIR: &str = ".data";
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5000;

/// Where the contact store lives and how long a writer waits on a locked
/// database before giving up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub db_path: PathBuf,
    pub busy_timeout_ms: u64,
}

impl StoreConfig {
    /// Load from the environment.
    ///
    /// - `CONTACTS_DB_PATH`: database file (default `.data/contacts.db`)
    /// - `CONTACTS_BUSY_TIMEOUT_MS`: lock wait in milliseconds (default 5000)
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let db_path = match env::var(DB_PATH_VAR) {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: DB_PATH_VAR.to_string(),
                    reason: "Cannot be empty".to_string(),
                })
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => default_db_path(),
        };

        let busy_timeout_ms = match env::var(BUSY_TIMEOUT_VAR) {
            Ok(val) => val.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: BUSY_TIMEOUT_VAR.to_string(),
                reason: format!("Must be a number of milliseconds, got: {}", val),
            })?,
            Err(_) => DEFAULT_BUSY_TIMEOUT_MS,
        };

        Ok(Self {
            db_path,
            busy_timeout_ms,
        })
    }

    /// Store file `contacts.db` inside `dir`, default timeout.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            db_path: dir.as_ref().join(DEFAULT_DB_FILE),
            ..Self::default()
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            busy_timeout_ms: DEFAULT_BUSY_TIMEOUT_MS,
        }
    }
}

fn default_db_path() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR).join(DEFAULT_DB_FILE)
}
