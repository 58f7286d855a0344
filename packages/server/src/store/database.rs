use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{
    ConnectionTrait, DatabaseConnection, EntityTrait, FromQueryResult, QueryOrder, QuerySelect,
    Set, Statement,
};
use uuid::Uuid;

use crate::entity::generation;

use super::error::StoreError;
use super::record::{GenerationMetadata, GenerationRecord, NewGeneration, StoreProbe};
use super::traits::{GenerationStore, parse_id};

const MAX_PROBED_TABLES: usize = 10;

/// sea-orm backed store over the `generation` table.
pub struct DatabaseGenerationStore {
    db: DatabaseConnection,
}

impl DatabaseGenerationStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// `generation` row without the archive column.
#[derive(Debug, FromQueryResult)]
struct GenerationRow {
    id: Uuid,
    plugin_name: String,
    package_name: String,
    description: String,
    api: String,
    commands: serde_json::Value,
    files: serde_json::Value,
    archive_size: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<GenerationRow> for GenerationMetadata {
    type Error = StoreError;

    fn try_from(row: GenerationRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: row.id.to_string(),
            plugin_name: row.plugin_name,
            package_name: row.package_name,
            description: row.description,
            api: row.api,
            commands: serde_json::from_value(row.commands)?,
            files: serde_json::from_value(row.files)?,
            archive_size: u64::try_from(row.archive_size).map_err(|_| {
                StoreError::Backend(format!(
                    "generation {} has negative archive_size {}",
                    row.id, row.archive_size
                ))
            })?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl TryFrom<generation::Model> for GenerationRecord {
    type Error = StoreError;

    fn try_from(model: generation::Model) -> Result<Self, Self::Error> {
        let row = GenerationRow {
            id: model.id,
            plugin_name: model.plugin_name,
            package_name: model.package_name,
            description: model.description,
            api: model.api,
            commands: model.commands,
            files: model.files,
            archive_size: model.archive_size,
            created_at: model.created_at,
            updated_at: model.updated_at,
        };
        Ok(Self {
            metadata: row.try_into()?,
            archive: model.archive,
        })
    }
}

#[async_trait]
impl GenerationStore for DatabaseGenerationStore {
    async fn create(&self, record: NewGeneration) -> Result<String, StoreError> {
        let id = Uuid::now_v7();
        let archive_size = i64::try_from(record.archive_size())
            .map_err(|_| StoreError::Backend("archive too large".into()))?;

        let model = generation::ActiveModel {
            id: Set(id),
            plugin_name: Set(record.plugin_name),
            package_name: Set(record.package_name),
            description: Set(record.description),
            api: Set(record.api),
            commands: Set(serde_json::to_value(&record.commands)?),
            files: Set(serde_json::to_value(&record.files)?),
            archive_size: Set(archive_size),
            created_at: Set(record.created_at),
            updated_at: Set(record.created_at),
            archive: Set(record.archive),
        };

        generation::Entity::insert(model)
            .exec_without_returning(&self.db)
            .await?;

        Ok(id.to_string())
    }

    async fn get(&self, id: &str) -> Result<GenerationRecord, StoreError> {
        let uuid = parse_id(id)?;

        let model = generation::Entity::find_by_id(uuid)
            .one(&self.db)
            .await?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        model.try_into()
    }

    async fn list(&self, limit: u64) -> Result<Vec<GenerationMetadata>, StoreError> {
        let rows = generation::Entity::find()
            .select_only()
            .column(generation::Column::Id)
            .column(generation::Column::PluginName)
            .column(generation::Column::PackageName)
            .column(generation::Column::Description)
            .column(generation::Column::Api)
            .column(generation::Column::Commands)
            .column(generation::Column::Files)
            .column(generation::Column::ArchiveSize)
            .column(generation::Column::CreatedAt)
            .column(generation::Column::UpdatedAt)
            .order_by_desc(generation::Column::CreatedAt)
            .order_by_desc(generation::Column::Id)
            .limit(limit)
            .into_model::<GenerationRow>()
            .all(&self.db)
            .await?;

        rows.into_iter().map(GenerationMetadata::try_from).collect()
    }

    async fn probe(&self) -> Result<StoreProbe, StoreError> {
        self.db.ping().await?;

        let backend = self.db.get_database_backend();

        let database_name = self
            .db
            .query_one_raw(Statement::from_string(
                backend,
                "SELECT current_database() AS name".to_string(),
            ))
            .await?
            .map(|row| row.try_get::<String>("", "name"))
            .transpose()?;

        let tables = self
            .db
            .query_all_raw(Statement::from_string(
                backend,
                format!(
                    "SELECT table_name FROM information_schema.tables \
                     WHERE table_schema = 'public' ORDER BY table_name LIMIT {MAX_PROBED_TABLES}"
                ),
            ))
            .await?
            .into_iter()
            .map(|row| row.try_get::<String>("", "table_name"))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(StoreProbe {
            backend: "postgres",
            database_name,
            tables,
        })
    }
}
