//! Configuration for the global configuration module

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global configuration module settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Row key used by the database backend
    #[serde(default = "default_configuration_id")]
    pub configuration_id: String,

    /// Where the record is persisted
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            configuration_id: default_configuration_id(),
            storage: StorageConfig::default(),
        }
    }
}

/// Persistence backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum StorageConfig {
    /// Single JSON document
    File {
        #[serde(default = "default_file_path")]
        path: PathBuf,
    },
    /// SeaORM table, migrated on init
    Database { dsn: String },
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::File {
            path: default_file_path(),
        }
    }
}

fn default_configuration_id() -> String {
    "global_configuration".to_string()
}

fn default_file_path() -> PathBuf {
    PathBuf::from("data/global_configuration.json")
}
