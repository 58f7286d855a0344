use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::error::StoreError;
use super::record::{GenerationMetadata, GenerationRecord, NewGeneration, StoreProbe};
use super::traits::{GenerationStore, parse_id};

/// Process-local store. Contents are lost on restart.
#[derive(Default)]
pub struct MemoryGenerationStore {
    /// Insertion order.
    records: RwLock<Vec<GenerationRecord>>,
}

impl MemoryGenerationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GenerationStore for MemoryGenerationStore {
    async fn create(&self, record: NewGeneration) -> Result<String, StoreError> {
        let id = Uuid::now_v7().to_string();
        let record = GenerationRecord::from_new(id.clone(), record);
        self.records.write().await.push(record);
        Ok(id)
    }

    async fn get(&self, id: &str) -> Result<GenerationRecord, StoreError> {
        let uuid = parse_id(id)?.to_string();
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.metadata.id == uuid)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn list(&self, limit: u64) -> Result<Vec<GenerationMetadata>, StoreError> {
        let records = self.records.read().await;
        // Newest insert first, so equal timestamps keep newest-first after the stable sort.
        let mut items: Vec<GenerationMetadata> =
            records.iter().rev().map(|r| r.metadata.clone()).collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        items.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(items)
    }

    async fn probe(&self) -> Result<StoreProbe, StoreError> {
        Ok(StoreProbe {
            backend: "memory",
            database_name: None,
            tables: vec!["generation".to_string()],
        })
    }
}
