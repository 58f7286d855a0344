use async_trait::async_trait;
use uuid::Uuid;

use super::error::StoreError;
use super::record::{GenerationMetadata, GenerationRecord, NewGeneration, StoreProbe};

/// Persistence for generated plugin archives.
///
/// Records are created once and never modified or deleted.
#[async_trait]
pub trait GenerationStore: Send + Sync {
    /// Persist a new record and return its freshly assigned identifier.
    async fn create(&self, record: NewGeneration) -> Result<String, StoreError>;

    /// Fetch a record, including its archive payload.
    ///
    /// Returns [`StoreError::InvalidId`] for malformed identifiers without
    /// touching storage, and [`StoreError::NotFound`] for unknown ones.
    async fn get(&self, id: &str) -> Result<GenerationRecord, StoreError>;

    /// Up to `limit` most recent records, newest first, without payloads.
    async fn list(&self, limit: u64) -> Result<Vec<GenerationMetadata>, StoreError>;

    /// Check connectivity and report what the backend looks like.
    async fn probe(&self) -> Result<StoreProbe, StoreError>;
}

/// Parse an externally supplied generation identifier.
pub fn parse_id(id: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(id.trim()).map_err(|_| StoreError::InvalidId(id.to_string()))
}
