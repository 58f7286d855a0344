use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RootResponse {
    #[schema(example = "Replix AI Backend is running")]
    pub message: String,
}

/// Flat diagnostic report. Never an error: probe failures show up in `database`.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DiagnosticsResponse {
    #[schema(example = "running")]
    pub backend: String,
    #[schema(example = "connected (postgres)")]
    pub database: String,
    /// Whether a database URL is configured (`set` / `not set`).
    #[schema(example = "set")]
    pub database_url: String,
    /// Whether a database name is configured (`set` / `not set`).
    #[schema(example = "not set")]
    pub database_name: String,
    #[schema(example = "connected")]
    pub connection_status: String,
    /// Up to 10 table names reported by the backend.
    pub tables: Vec<String>,
}
