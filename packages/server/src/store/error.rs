use sea_orm::DbErr;
use thiserror::Error;

/// Errors returned by a [`GenerationStore`](super::GenerationStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// The identifier is not a well-formed generation id. Storage is not consulted.
    #[error("invalid generation id: {0}")]
    InvalidId(String),

    /// The identifier is well-formed but no record exists.
    #[error("generation not found: {0}")]
    NotFound(String),

    /// The backend is not configured or cannot be reached.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("stored data could not be (de)serialized: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<DbErr> for StoreError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => Self::Unavailable(err.to_string()),
            other => Self::Backend(other.to_string()),
        }
    }
}
