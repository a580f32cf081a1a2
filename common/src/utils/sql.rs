//! SQL statement classification.

/// Returns true if the statement should take the read path.
///
/// Classification is a case-insensitive SELECT-prefix test and nothing more.
/// Statements that read without the prefix (`EXPLAIN`, `PRAGMA`, CTEs) take
/// the write path and come back as a synthetic `rows_affected` result.
pub fn is_select(sql: &str) -> bool {
    sql.trim().to_uppercase().starts_with("SELECT")
}
