//! Layered server configuration: defaults -> YAML -> env (APP__*) -> CLI

use anyhow::Result;
use figment::{
    providers::{Env, Format, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub global_configuration: global_configuration::config::Config,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:8087".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Defaults, then the YAML file if given, then `APP__*` environment variables.
    ///
    /// Defaults come from the serde attributes, so a layer that switches the
    /// storage kind never inherits the other kind's keys.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment = figment.merge(Env::prefixed("APP__").split("__"));

        Ok(figment.extract()?)
    }

    /// Port override from the command line
    pub fn apply_port(&mut self, port: u16) {
        let host = self
            .server
            .bind_addr
            .rsplit_once(':')
            .map(|(host, _)| host.to_string())
            .unwrap_or_else(|| self.server.bind_addr.clone());
        self.server.bind_addr = format!("{}:{}", host, port);
    }

    /// `-v` info, `-vv` debug, `-vvv` trace
    pub fn apply_verbosity(&mut self, verbose: u8) {
        let level = match verbose {
            0 => return,
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        self.logging.level = level.to_string();
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use global_configuration::config::StorageConfig;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::load(None).unwrap();
        assert_eq!(cfg.server.bind_addr, "127.0.0.1:8087");
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.global_configuration.configuration_id, "global_configuration");
    }

    #[test]
    fn test_yaml_selects_database_storage() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "global_configuration:\n  storage:\n    kind: database\n    dsn: \"sqlite::memory:\"\n"
        )
        .unwrap();

        let cfg = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(
            cfg.global_configuration.storage,
            StorageConfig::Database {
                dsn: "sqlite::memory:".to_string()
            }
        );
        assert_eq!(cfg.server.bind_addr, "127.0.0.1:8087");
    }

    #[test]
    fn test_yaml_overrides_file_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "server:\n  bind_addr: \"0.0.0.0:9090\"\nglobal_configuration:\n  storage:\n    kind: file\n    path: /var/lib/gc.json\n"
        )
        .unwrap();

        let cfg = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(cfg.server.bind_addr, "0.0.0.0:9090");
        assert_eq!(
            cfg.global_configuration.storage,
            StorageConfig::File {
                path: "/var/lib/gc.json".into()
            }
        );
        assert_eq!(cfg.global_configuration.configuration_id, "global_configuration");
    }

    #[test]
    fn test_overrides() {
        let mut cfg = AppConfig::default();
        cfg.apply_port(9000);
        assert_eq!(cfg.server.bind_addr, "127.0.0.1:9000");

        cfg.apply_verbosity(0);
        assert_eq!(cfg.logging.level, "info");
        cfg.apply_verbosity(2);
        assert_eq!(cfg.logging.level, "debug");
    }
}
