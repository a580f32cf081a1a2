//! 教学数据库初始化
//!
//! 启动时创建并填充 `students` 与 `favorites` 两张教学表，示例查询
//! 因此有数据可跑。初始化失败会中止启动。

use common::errors::{AppError, AppResult};
use sqlx::SqlitePool;
use tracing::info;

/// Embedded schema and seed script.
const INIT_SCRIPT: &str = include_str!("../sql/initialize-database.sql");

/// Executes the embedded initialization script against the pool.
pub async fn initialize_database(pool: &SqlitePool) -> AppResult<()> {
    sqlx::raw_sql(INIT_SCRIPT)
        .execute(pool)
        .await
        .map_err(|e| AppError::DatabaseQuery(format!("Failed to initialize database: {}", e)))?;

    info!("教学数据库初始化完成");
    Ok(())
}
