use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CappicConfig {
    pub client: ClientConfig,
    pub storage: StorageConfig,
    pub remote: RemoteConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ClientConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub db_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RemoteConfig {
    pub api_url: String,
}

impl Default for CappicConfig {
    fn default() -> Self {
        Self {
            client: ClientConfig::default(),
            storage: StorageConfig::default(),
            remote: RemoteConfig::default(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let db_path = default_cappic_dir()
            .join("moments.db")
            .to_string_lossy()
            .into_owned();
        Self { db_path }
    }
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.cappic.app/v1".into(),
        }
    }
}

/// Returns `~/.cappic/`
pub fn default_cappic_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".cappic")
}

/// Returns the default config file path: `~/.cappic/config.toml`
pub fn default_config_path() -> PathBuf {
    default_cappic_dir().join("config.toml")
}

/// Returns the cached session path: `~/.cappic/session.json`
pub fn default_session_path() -> PathBuf {
    default_cappic_dir().join("session.json")
}

impl CappicConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            CappicConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (CAPPIC_DB, CAPPIC_API_URL, CAPPIC_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("CAPPIC_DB") {
            self.storage.db_path = val;
        }
        if let Ok(val) = std::env::var("CAPPIC_API_URL") {
            self.remote.api_url = val;
        }
        if let Ok(val) = std::env::var("CAPPIC_LOG_LEVEL") {
            self.client.log_level = val;
        }
    }

    /// Resolve the database path, expanding `~` if needed.
    pub fn resolved_db_path(&self) -> PathBuf {
        expand_tilde(&self.storage.db_path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = CappicConfig::default();
        assert_eq!(config.client.log_level, "info");
        assert_eq!(config.remote.api_url, "https://api.cappic.app/v1");
        assert!(config.storage.db_path.ends_with("moments.db"));
    }

    #[test]
    fn parse_toml_config() {
        let toml_str = r#"
[client]
log_level = "debug"

[storage]
db_path = "/tmp/test.db"

[remote]
api_url = "http://localhost:8080/v1"
"#;
        let config: CappicConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.client.log_level, "debug");
        assert_eq!(config.storage.db_path, "/tmp/test.db");
        assert_eq!(config.remote.api_url, "http://localhost:8080/v1");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: CappicConfig = toml::from_str("[storage]\ndb_path = \"/tmp/x.db\"\n").unwrap();
        assert_eq!(config.storage.db_path, "/tmp/x.db");
        // defaults still apply for unset sections
        assert_eq!(config.client.log_level, "info");
        assert_eq!(config.remote.api_url, "https://api.cappic.app/v1");
    }

    #[test]
    fn env_overrides_apply() {
        let mut config = CappicConfig::default();
        std::env::set_var("CAPPIC_DB", "/tmp/override.db");
        std::env::set_var("CAPPIC_API_URL", "http://localhost:9999/v1");
        std::env::set_var("CAPPIC_LOG_LEVEL", "trace");

        config.apply_env_overrides();

        assert_eq!(config.storage.db_path, "/tmp/override.db");
        assert_eq!(config.remote.api_url, "http://localhost:9999/v1");
        assert_eq!(config.client.log_level, "trace");

        // Clean up
        std::env::remove_var("CAPPIC_DB");
        std::env::remove_var("CAPPIC_API_URL");
        std::env::remove_var("CAPPIC_LOG_LEVEL");
    }
}
