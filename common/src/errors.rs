//! Application error types.
//!
//! Defines the error taxonomy and its mapping to HTTP responses. The
//! `IntoResponse` impl is the only place internal failures are translated
//! into a status code plus an `ERROR` envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::response::ApiResponse;

/// Result alias used across the workspace.
pub type AppResult<T> = Result<T, AppError>;

/// Unified application error.
///
/// Display text is returned to the caller verbatim; no sanitization is
/// applied, so raw database error messages reach the client.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request failed validation (missing or blank SQL text).
    #[error("{0}")]
    Validation(String),

    /// Wrong HTTP verb on a known route.
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// Failed to acquire a database connection.
    #[error("{0}")]
    DatabaseConnection(String),

    /// The database rejected the statement (syntax error, constraint
    /// violation, connectivity loss mid-statement).
    #[error("{0}")]
    DatabaseQuery(String),

    /// Any other uncaught failure during request handling.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// The HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::DatabaseConnection(_)
            | AppError::DatabaseQuery(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "请求处理失败");
        }
        (status, Json(ApiResponse::error(self.to_string()))).into_response()
    }
}
