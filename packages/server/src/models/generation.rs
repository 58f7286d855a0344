use chrono::{DateTime, Utc};
use generator::CommandSpec;
use serde::{Deserialize, Serialize};

use crate::store::GenerationMetadata;

/// Response DTO for a successful generation.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct GenerateResponse {
    /// Generation ID (UUIDv7).
    #[schema(example = "01936f0e-1234-7abc-8000-000000000001")]
    pub id: String,
    /// Archive size in bytes.
    #[schema(example = 2048)]
    pub archive_size: u64,
    #[schema(example = "/api/download/01936f0e-1234-7abc-8000-000000000001")]
    pub download_url: String,
    #[schema(example = "Plugin generated successfully")]
    pub message: String,
}

impl GenerateResponse {
    pub fn new(id: String, archive_size: u64) -> Self {
        Self {
            download_url: download_url(&id),
            id,
            archive_size,
            message: "Plugin generated successfully".into(),
        }
    }
}

pub fn download_url(id: &str) -> String {
    format!("/api/download/{id}")
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct HistoryQuery {
    /// Maximum number of records (default 20, max 100).
    pub limit: Option<u64>,
}

/// History entry: stored metadata without the archive payload.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct GenerationSummary {
    #[schema(example = "01936f0e-1234-7abc-8000-000000000001")]
    pub id: String,
    #[schema(example = "My Plugin")]
    pub plugin_name: String,
    #[schema(example = "com.example.myplugin")]
    pub package_name: String,
    pub description: String,
    #[schema(example = "spigot")]
    pub api: String,
    pub commands: Vec<CommandSpec>,
    /// Request-derived archive entries.
    pub files: Vec<String>,
    pub archive_size: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HistoryResponse {
    pub items: Vec<GenerationSummary>,
}

impl From<GenerationMetadata> for GenerationSummary {
    fn from(m: GenerationMetadata) -> Self {
        Self {
            id: m.id,
            plugin_name: m.plugin_name,
            package_name: m.package_name,
            description: m.description,
            api: m.api,
            commands: m.commands,
            files: m.files,
            archive_size: m.archive_size,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
