use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One generated plugin archive together with the request that produced it.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "generation")]
pub struct Model {
    /// UUIDv7 primary key.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub plugin_name: String,

    pub package_name: String,

    #[sea_orm(column_type = "Text")]
    pub description: String,

    pub api: String,

    /// Snapshot of the requested commands as a JSON array.
    #[sea_orm(column_type = "JsonBinary")]
    pub commands: serde_json::Value,

    /// Request-derived archive paths as a JSON array of strings.
    #[sea_orm(column_type = "JsonBinary")]
    pub files: serde_json::Value,

    pub archive_size: i64,

    #[sea_orm(indexed)]
    pub created_at: DateTimeUtc,

    pub updated_at: DateTimeUtc,

    /// ZIP payload. Never selected by list queries.
    #[serde(skip)]
    pub archive: Vec<u8>,
}

impl ActiveModelBehavior for ActiveModel {}
