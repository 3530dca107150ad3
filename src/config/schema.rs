//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};
use url::Url;

/// Root configuration for the product service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Database connection settings.
    pub database: DatabaseConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8010").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8010".to_string(),
        }
    }
}

/// SQL backend the product table lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DbDriver {
    Mysql,
    Sqlite,
}

/// Database connection configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Backend driver.
    pub driver: DbDriver,

    /// Database user (MySQL only).
    pub user: String,

    /// Database password (MySQL only).
    pub password: String,

    /// Database host (MySQL only).
    pub host: String,

    /// Database port (MySQL only).
    pub port: u16,

    /// Database name, or file path / ":memory:" for SQLite.
    pub name: String,

    /// Maximum pooled connections shared by all requests.
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            driver: DbDriver::Mysql,
            user: "root".to_string(),
            password: String::new(),
            host: "127.0.0.1".to_string(),
            port: 3306,
            name: "inventory".to_string(),
            max_connections: 10,
        }
    }
}

impl DatabaseConfig {
    /// In-memory SQLite database, used by tests and local runs.
    pub fn sqlite_in_memory() -> Self {
        Self {
            driver: DbDriver::Sqlite,
            name: ":memory:".to_string(),
            ..Self::default()
        }
    }

    /// Whether this config points at a per-connection in-memory database.
    pub fn is_in_memory(&self) -> bool {
        self.driver == DbDriver::Sqlite && self.name == ":memory:"
    }

    /// Build the driver connection URL.
    ///
    /// Credentials are percent-encoded by [`Url`], so passwords with `@` or
    /// `/` survive intact.
    pub fn connection_url(&self) -> Result<String, url::ParseError> {
        match self.driver {
            DbDriver::Sqlite if self.is_in_memory() => Ok("sqlite::memory:".to_string()),
            DbDriver::Sqlite => Ok(format!("sqlite://{}?mode=rwc", self.name)),
            DbDriver::Mysql => {
                let mut url = Url::parse(&format!("mysql://{}:{}", self.host, self.port))?;
                url.set_path(&format!("/{}", self.name));
                // Only fails for cannot-be-a-base URLs, which mysql:// never is.
                let _ = url.set_username(&self.user);
                if !self.password.is_empty() {
                    let _ = url.set_password(Some(&self.password));
                }
                Ok(url.to_string())
            }
        }
    }

    /// Connection URL with the password masked, for logs.
    pub fn redacted_url(&self) -> String {
        let mut masked = self.clone();
        if !masked.password.is_empty() {
            masked.password = "***".to_string();
        }
        masked
            .connection_url()
            .unwrap_or_else(|_| "<invalid database url>".to_string())
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
