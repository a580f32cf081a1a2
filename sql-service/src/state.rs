//! Application state for the SQL learning service.

use std::time::Duration;

use common::config::AppConfig;
use common::errors::{AppError, AppResult};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use crate::bootstrap;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub pool: SqlitePool,
}

impl AppState {
    /// Creates the application state: connects the pool and bootstraps the
    /// teaching schema.
    ///
    /// SQLite runs on a single pooled connection held open for the process
    /// lifetime, so an in-memory database survives between requests.
    pub async fn new(config: AppConfig) -> AppResult<Self> {
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
            .connect(&config.database_url)
            .await
            .map_err(|e| AppError::DatabaseConnection(e.to_string()))?;

        bootstrap::initialize_database(&pool).await?;

        Ok(Self { config, pool })
    }
}
