//! SQL query models.
//!
//! Request and normalized-result types for SQL statement execution.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for executing a SQL statement.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QueryRequest {
    /// SQL text, executed verbatim. Optional in the wire format so a missing
    /// field reaches the dispatcher's fixed-message rejection instead of a
    /// deserialization error.
    #[serde(default)]
    pub sql: Option<String>,
}

/// Normalized result of a SQL statement execution.
///
/// Invariant: every row's length equals the column count.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    /// Column names in result order.
    pub columns: Vec<String>,

    /// Row data, each row aligned positionally with `columns`.
    pub rows: Vec<Vec<serde_json::Value>>,

    /// Row count for reads, rows affected for writes.
    pub count: u64,

    /// Wall-clock execution time in milliseconds, connection acquisition
    /// included.
    pub exec_time_ms: u64,
}

impl QueryResult {
    /// Synthesizes the uniform result for a non-SELECT statement: exactly one
    /// column named `rows_affected` and exactly one row holding the count.
    pub fn rows_affected(affected: u64, exec_time_ms: u64) -> Self {
        Self {
            columns: vec!["rows_affected".to_string()],
            rows: vec![vec![serde_json::Value::from(affected)]],
            count: affected,
            exec_time_ms,
        }
    }
}
