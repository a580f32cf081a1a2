//! API response envelope.
//!
//! Every endpoint answers with the same `{type, data}` wrapper; clients rely
//! on the `type` tag to discriminate the payload. No other shapes are ever
//! emitted.

use serde::Serialize;
use utoipa::ToSchema;

/// Discriminator tag carried in every response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum ResponseType {
    /// Health/bootstrap payload.
    #[serde(rename = "HEALTH")]
    Health,

    /// Normalized tabular query result.
    #[serde(rename = "TABLE")]
    Table,

    /// Error payload.
    #[serde(rename = "ERROR")]
    Error,
}

/// Standard response envelope.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T: Serialize> {
    /// Payload discriminator.
    #[serde(rename = "type")]
    pub kind: ResponseType,

    /// Payload matching the discriminator.
    pub data: T,
}

/// Error payload carried by `ERROR` envelopes.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorData {
    /// Human-readable failure message, passed through verbatim.
    #[serde(rename = "errorMessage")]
    pub error_message: String,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wraps a health payload.
    pub fn health(data: T) -> Self {
        Self {
            kind: ResponseType::Health,
            data,
        }
    }

    /// Wraps a tabular query result.
    pub fn table(data: T) -> Self {
        Self {
            kind: ResponseType::Table,
            data,
        }
    }
}

impl ApiResponse<ErrorData> {
    /// Wraps an error message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ResponseType::Error,
            data: ErrorData {
                error_message: message.into(),
            },
        }
    }
}
