//! Application configuration
//!
//! Loaded from a TOML file (default `~/.config/utility-billing/config.toml`).
//! Every field has a default, so a partial or missing file still yields a
//! usable configuration.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8000
//!
//! [database]
//! url = "sqlite://./billing.db?mode=rwc"
//!
//! [logging]
//! level = "info"
//! format = "text"
//!
//! [web]
//! static_dir = "static"
//! cors_origins = ["*"]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::infrastructure::database::{DatabaseConfig, DEFAULT_DATABASE_URL};
use crate::support::errors::InfraError;

/// Directory under the user config dir holding `config.toml`
const APP_DIR: &str = "utility-billing";

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs_next::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("config.toml")
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseSettings,
    pub logging: LoggingConfig,
    pub web: WebConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds to wait for in-flight requests on shutdown
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
            shutdown_timeout: 30,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatabaseSettings {
    /// Full connection URL. Takes precedence over `path`.
    pub url: Option<String>,
    /// SQLite file path, used when `url` is not set
    pub path: Option<String>,
    pub pool: PoolConfig,
}

impl DatabaseSettings {
    /// Resolve the connection URL: `DATABASE_URL` env, then `url`, then `path`.
    pub fn connection_url(&self) -> String {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            if !url.is_empty() {
                return url;
            }
        }
        self.configured_url()
    }

    fn configured_url(&self) -> String {
        if let Some(url) = &self.url {
            return url.clone();
        }
        match &self.path {
            Some(path) => DatabaseConfig::sqlite(path).url,
            None => DEFAULT_DATABASE_URL.to_string(),
        }
    }
}

/// Connection pool settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_secs: u64,
    pub idle_timeout_secs: u64,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: 10,
            min_connections: 1,
            connect_timeout_secs: 10,
            idle_timeout_secs: 300,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. "info" or "utility_billing=debug,info"
    pub level: String,
    /// "text" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WebConfig {
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Allowed CORS origins; `"*"` allows any origin
    pub cors_origins: Vec<String>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            static_dir: PathBuf::from("static"),
            cors_origins: vec!["*".to_string()],
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file yields the defaults; an unreadable or malformed file
    /// is an error.
    pub fn load(path: &Path) -> Result<Self, InfraError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, InfraError> {
        Ok(toml::from_str(content)?)
    }
}
