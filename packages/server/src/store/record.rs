use chrono::{DateTime, Utc};
use generator::{CommandSpec, GenerateRequest, GeneratedArchive};

/// Input to [`GenerationStore::create`](super::GenerationStore::create).
#[derive(Debug, Clone)]
pub struct NewGeneration {
    pub plugin_name: String,
    pub package_name: String,
    pub description: String,
    pub api: String,
    pub commands: Vec<CommandSpec>,
    pub files: Vec<String>,
    pub archive: Vec<u8>,
    pub created_at: DateTime<Utc>,
}

impl NewGeneration {
    pub fn new(request: &GenerateRequest, archive: GeneratedArchive, now: DateTime<Utc>) -> Self {
        Self {
            plugin_name: request.plugin_name.clone(),
            package_name: request.package_name.clone(),
            description: request.description.clone(),
            api: request.api.clone(),
            commands: request.commands.clone(),
            files: archive.files,
            archive: archive.bytes,
            created_at: now,
        }
    }

    pub fn archive_size(&self) -> u64 {
        self.archive.len() as u64
    }
}

/// Everything stored about a generation except the archive payload.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationMetadata {
    pub id: String,
    pub plugin_name: String,
    pub package_name: String,
    pub description: String,
    pub api: String,
    pub commands: Vec<CommandSpec>,
    pub files: Vec<String>,
    pub archive_size: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct GenerationRecord {
    pub metadata: GenerationMetadata,
    pub archive: Vec<u8>,
}

impl GenerationRecord {
    pub(crate) fn from_new(id: String, record: NewGeneration) -> Self {
        let archive_size = record.archive_size();
        Self {
            metadata: GenerationMetadata {
                id,
                plugin_name: record.plugin_name,
                package_name: record.package_name,
                description: record.description,
                api: record.api,
                commands: record.commands,
                files: record.files,
                archive_size,
                created_at: record.created_at,
                updated_at: record.created_at,
            },
            archive: record.archive,
        }
    }
}

/// Result of a successful [`GenerationStore::probe`](super::GenerationStore::probe).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreProbe {
    /// Short backend label, e.g. `postgres` or `memory`.
    pub backend: &'static str,
    pub database_name: Option<String>,
    /// At most 10 table (or collection) names.
    pub tables: Vec<String>,
}
