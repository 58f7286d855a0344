use async_trait::async_trait;

use super::error::StoreError;
use super::record::{GenerationMetadata, GenerationRecord, NewGeneration, StoreProbe};
use super::traits::{GenerationStore, parse_id};

/// Stand-in used when no backend could be set up at startup.
///
/// Every call fails with [`StoreError::Unavailable`], except that `get` still
/// reports malformed identifiers as [`StoreError::InvalidId`].
pub struct UnavailableGenerationStore {
    reason: String,
}

impl UnavailableGenerationStore {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    fn error(&self) -> StoreError {
        StoreError::Unavailable(self.reason.clone())
    }
}

#[async_trait]
impl GenerationStore for UnavailableGenerationStore {
    async fn create(&self, _record: NewGeneration) -> Result<String, StoreError> {
        Err(self.error())
    }

    async fn get(&self, id: &str) -> Result<GenerationRecord, StoreError> {
        parse_id(id)?;
        Err(self.error())
    }

    async fn list(&self, _limit: u64) -> Result<Vec<GenerationMetadata>, StoreError> {
        Err(self.error())
    }

    async fn probe(&self) -> Result<StoreProbe, StoreError> {
        Err(self.error())
    }
}
