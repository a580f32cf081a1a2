//! Service configuration.
//!
//! Explicit configuration loaded from the environment with defaults, injected
//! into the service at construction instead of living in process-wide
//! constants.

use std::env;
use std::str::FromStr;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Bind host.
    pub host: String,

    /// Bind port.
    pub port: u16,

    /// Database URL in sqlx format (e.g. `sqlite::memory:`,
    /// `sqlite:learning.db?mode=rwc`).
    pub database_url: String,

    /// Maximum number of pooled connections.
    pub max_connections: u32,

    /// Connection acquire timeout in seconds.
    pub connect_timeout_secs: u64,

    /// Service name, used for logging.
    pub service_name: String,
}

impl AppConfig {
    /// Loads configuration for the given service from the environment.
    ///
    /// Recognized variables: `HOST`, `SERVER_PORT`, `DATABASE_URL`,
    /// `DB_MAX_CONNECTIONS`, `DB_CONNECT_TIMEOUT_SECS`.
    pub fn load_with_service(service_name: &str) -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env_parse("SERVER_PORT", 8080),
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite::memory:".to_string()),
            max_connections: env_parse("DB_MAX_CONNECTIONS", 5),
            connect_timeout_secs: env_parse("DB_CONNECT_TIMEOUT_SECS", 5),
            service_name: service_name.to_string(),
        }
    }
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
