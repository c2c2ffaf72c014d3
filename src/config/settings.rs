//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use super::constants::{
    DEFAULT_CONNECT_TIMEOUT_SECONDS, DEFAULT_DATABASE_URL, DEFAULT_MAX_CONNECTIONS,
    DEFAULT_MIN_CONNECTIONS, DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};
use super::isolation::ReadIsolation;

/// Database pool configuration
#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout_seconds: u64,
    /// Log every statement sqlx executes
    pub sqlx_logging: bool,
}

impl DatabaseConfig {
    /// Configuration for a given URL with default pool settings.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            min_connections: DEFAULT_MIN_CONNECTIONS,
            connect_timeout_seconds: DEFAULT_CONNECT_TIMEOUT_SECONDS,
            sqlx_logging: false,
        }
    }
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("connect_timeout_seconds", &self.connect_timeout_seconds)
            .field("sqlx_logging", &self.sqlx_logging)
            .finish()
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server_host: String,
    pub server_port: u16,
    /// Isolation used by read-only operations such as listing pets
    pub pets_read_isolation: ReadIsolation,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let pets_read_isolation = match env::var("PETS_READ_ISOLATION") {
            Ok(value) => ReadIsolation::from_str(&value).unwrap_or_else(|e| {
                tracing::warn!("{}, using {}", e, ReadIsolation::default());
                ReadIsolation::default()
            }),
            Err(_) => ReadIsolation::default(),
        };

        Self {
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
                max_connections: parse_var("DATABASE_MAX_CONNECTIONS")
                    .unwrap_or(DEFAULT_MAX_CONNECTIONS),
                min_connections: parse_var("DATABASE_MIN_CONNECTIONS")
                    .unwrap_or(DEFAULT_MIN_CONNECTIONS),
                connect_timeout_seconds: parse_var("DATABASE_CONNECT_TIMEOUT_SECONDS")
                    .unwrap_or(DEFAULT_CONNECT_TIMEOUT_SECONDS),
                sqlx_logging: parse_var("DATABASE_SQLX_LOGGING").unwrap_or(false),
            },
            server_host: env::var("SERVER_HOST")
                .unwrap_or_else(|_| DEFAULT_SERVER_HOST.to_string()),
            server_port: parse_var("SERVER_PORT").unwrap_or(DEFAULT_SERVER_PORT),
            pets_read_isolation,
        }
    }

    /// Configuration pointing at the given database, everything else default.
    pub fn for_database(url: impl Into<String>) -> Self {
        Self {
            database: DatabaseConfig::with_url(url),
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            pets_read_isolation: ReadIsolation::default(),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_var<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}
