//! Health and capability models.
//!
//! Payload for the health/bootstrap endpoint: connectivity plus the static
//! catalog of sample queries and known tables. Rebuilt per request, never
//! cached.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Category of a sample query in the learning catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum QueryCategory {
    /// Read-only example queries.
    #[serde(rename = "SELECT Queries")]
    Select,

    /// Data modification examples.
    #[serde(rename = "INSERT/UPDATE/DELETE")]
    Mutation,

    /// DDL and schema inspection examples.
    #[serde(rename = "Table Operations")]
    TableOps,
}

/// A labeled example query shown to learners.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NamedQuery {
    /// Display title.
    pub title: String,

    /// SQL text.
    pub query: String,

    /// Catalog category.
    pub category: QueryCategory,
}

/// Health/bootstrap payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct HealthResult {
    /// Whether a database connection could be acquired.
    pub connected: bool,

    /// Human-readable status message.
    pub message: String,

    /// Catalog of labeled sample queries (empty when not connected).
    pub sample_queries: Vec<NamedQuery>,

    /// Known table names (empty when not connected).
    pub table_names: Vec<String>,
}
