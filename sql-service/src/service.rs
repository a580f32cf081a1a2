//! SQL 执行服务模块
//!
//! 单条 SQL 语句的执行与结果规范化：SELECT 前缀的语句走读路径，其余
//! 语句走写路径并合成 `rows_affected` 单行结果。

use std::time::Instant;

use chrono::{NaiveDate, NaiveDateTime};
use common::errors::{AppError, AppResult};
use common::models::{HealthResult, QueryResult};
use common::utils::sql::is_select;
use serde_json::Value;
use sqlx::sqlite::SqliteRow;
use sqlx::{Column, Row, SqlitePool, TypeInfo};

use crate::catalog;

/// SQL 查询执行服务
pub struct QueryService {
    pool: SqlitePool,
}

impl QueryService {
    /// 创建新的查询服务实例
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// 执行单条 SQL 语句并返回规范化结果
    ///
    /// 连接按请求获取，无论成功失败都在返回前归还。失败不重试，第一个
    /// 错误原样上抛。
    pub async fn execute(&self, sql: &str) -> AppResult<QueryResult> {
        let start = Instant::now();

        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| AppError::DatabaseConnection(e.to_string()))?;

        if is_select(sql) {
            let rows = sqlx::query(sql)
                .fetch_all(&mut *conn)
                .await
                .map_err(|e| AppError::DatabaseQuery(e.to_string()))?;

            // 零行结果没有可用的列元数据
            let columns: Vec<String> = rows
                .first()
                .map(|row| row.columns().iter().map(|c| c.name().to_string()).collect())
                .unwrap_or_default();

            let data: Vec<Vec<Value>> = rows.iter().map(convert_row).collect();
            let count = data.len() as u64;

            Ok(QueryResult {
                columns,
                rows: data,
                count,
                exec_time_ms: start.elapsed().as_millis() as u64,
            })
        } else {
            let result = sqlx::query(sql)
                .execute(&mut *conn)
                .await
                .map_err(|e| AppError::DatabaseQuery(e.to_string()))?;

            Ok(QueryResult::rows_affected(
                result.rows_affected(),
                start.elapsed().as_millis() as u64,
            ))
        }
    }

    /// 健康检查：探测数据库连通性并返回静态能力目录
    ///
    /// 此方法从不向外抛错：探测失败以 `connected: false` 加失败信息返回。
    pub async fn health(&self) -> HealthResult {
        match self.probe().await {
            Ok(()) => HealthResult {
                connected: true,
                message: "Green means go!".to_string(),
                sample_queries: catalog::sample_queries(),
                table_names: catalog::table_names(),
            },
            Err(e) => HealthResult {
                connected: false,
                message: e.to_string(),
                sample_queries: vec![],
                table_names: vec![],
            },
        }
    }

    async fn probe(&self) -> AppResult<()> {
        let mut conn = self
            .pool
            .acquire()
            .await
            .map_err(|e| AppError::DatabaseConnection(e.to_string()))?;

        sqlx::query("SELECT 1")
            .execute(&mut *conn)
            .await
            .map_err(|e| AppError::DatabaseQuery(e.to_string()))?;

        Ok(())
    }
}

/// Converts a sqlx row into JSON-safe cell values.
fn convert_row(row: &SqliteRow) -> Vec<Value> {
    row.columns()
        .iter()
        .enumerate()
        .map(|(i, col)| convert_value(row, i, col.type_info().name()))
        .collect()
}

/// Converts one cell, keyed on the column's declared type name.
///
/// Date columns are normalized to ISO calendar-date strings; everything else
/// keeps its natural JSON-representable form, `NULL` included.
fn convert_value(row: &SqliteRow, index: usize, type_name: &str) -> Value {
    match type_name.to_uppercase().as_str() {
        "DATE" => row
            .try_get::<Option<NaiveDate>, _>(index)
            .ok()
            .flatten()
            .map(|d| Value::String(d.to_string()))
            .unwrap_or(Value::Null),

        "DATETIME" | "TIMESTAMP" => row
            .try_get::<Option<NaiveDateTime>, _>(index)
            .ok()
            .flatten()
            .map(|d| Value::String(d.to_string()))
            .unwrap_or(Value::Null),

        "BOOLEAN" | "BOOL" => row
            .try_get::<Option<bool>, _>(index)
            .ok()
            .flatten()
            .map(Value::Bool)
            .unwrap_or(Value::Null),

        "INTEGER" | "INT" | "INT4" | "INT8" | "BIGINT" => row
            .try_get::<Option<i64>, _>(index)
            .ok()
            .flatten()
            .map(Value::from)
            .unwrap_or(Value::Null),

        "REAL" | "FLOAT" | "DOUBLE" | "NUMERIC" => row
            .try_get::<Option<f64>, _>(index)
            .ok()
            .flatten()
            .map(Value::from)
            .unwrap_or(Value::Null),

        // TEXT, BLOB declared as text, and anything unrecognized
        _ => row
            .try_get::<Option<String>, _>(index)
            .ok()
            .flatten()
            .map(Value::String)
            .unwrap_or(Value::Null),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn service() -> QueryService {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::bootstrap::initialize_database(&pool).await.unwrap();
        QueryService::new(pool)
    }

    #[tokio::test]
    async fn test_select_rows_align_with_columns() {
        let svc = service().await;
        let result = svc
            .execute("SELECT first_name, last_name FROM students")
            .await
            .unwrap();

        assert_eq!(result.columns, vec!["first_name", "last_name"]);
        assert_eq!(result.count, result.rows.len() as u64);
        assert!(result
            .rows
            .iter()
            .all(|row| row.len() == result.columns.len()));
    }

    #[tokio::test]
    async fn test_write_path_synthesizes_rows_affected() {
        let svc = service().await;
        let result = svc
            .execute("DELETE FROM students WHERE id = 'missing'")
            .await
            .unwrap();

        assert_eq!(result.columns, vec!["rows_affected"]);
        assert_eq!(result.rows, vec![vec![serde_json::json!(0)]]);
        assert_eq!(result.count, 0);
    }

    #[tokio::test]
    async fn test_ddl_reports_zero_rows_affected() {
        let svc = service().await;
        let result = svc
            .execute("CREATE TABLE assignments (id INT PRIMARY KEY, title VARCHAR(200))")
            .await
            .unwrap();

        assert_eq!(result.columns, vec!["rows_affected"]);
        assert_eq!(result.count, 0);
    }

    #[tokio::test]
    async fn test_empty_result_set_has_zero_count() {
        let svc = service().await;
        let result = svc
            .execute("SELECT * FROM students WHERE 1 = 0")
            .await
            .unwrap();

        assert!(result.rows.is_empty());
        assert_eq!(result.count, 0);
    }

    #[tokio::test]
    async fn test_date_column_serializes_as_iso_string() {
        let svc = service().await;
        let result = svc
            .execute("SELECT birth_date FROM students WHERE id = 's-001'")
            .await
            .unwrap();

        assert_eq!(result.rows[0][0], serde_json::json!("2007-03-05"));
    }

    #[tokio::test]
    async fn test_null_cells_pass_through() {
        let svc = service().await;
        let result = svc
            .execute("SELECT email FROM students WHERE id = 's-003'")
            .await
            .unwrap();

        assert_eq!(result.rows[0][0], serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_execution_error_carries_driver_message() {
        let svc = service().await;
        let err = svc.execute("SELEC 1").await.unwrap_err();

        assert!(matches!(err, AppError::DatabaseQuery(_)));
        assert!(err.to_string().contains("syntax error"));
    }

    #[tokio::test]
    async fn test_health_reports_catalog_when_connected() {
        let svc = service().await;
        let health = svc.health().await;

        assert!(health.connected);
        assert_eq!(health.message, "Green means go!");
        assert!(!health.sample_queries.is_empty());
        assert_eq!(health.table_names, vec!["favorites", "students"]);
    }
}
