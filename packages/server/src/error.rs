use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use generator::GenerateError;
use serde::Serialize;

use crate::store::StoreError;

/// Structured error response returned by all endpoints on failure.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    /// Machine-readable error code. One of: `VALIDATION_ERROR`, `INVALID_ID`,
    /// `NOT_FOUND`, `STORAGE_UNAVAILABLE`, `INTERNAL_ERROR`.
    #[schema(example = "VALIDATION_ERROR")]
    pub code: &'static str,
    /// Human-readable error description.
    #[schema(example = "package_name must be a valid Java package like com.example.plugin")]
    pub message: String,
}

/// Application-level error type.
#[derive(Debug)]
pub enum AppError {
    Validation(String),
    /// Malformed record identifier.
    InvalidId(String),
    NotFound(String),
    /// Storage backend not configured or unreachable.
    StorageUnavailable(String),
    Internal(String),
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::InvalidId(_) => "INVALID_ID",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidId(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::StorageUnavailable(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn into_body(self) -> ErrorBody {
        let code = self.code();
        let message = match self {
            AppError::Validation(msg) | AppError::NotFound(msg) => msg,
            AppError::InvalidId(id) => format!("Invalid id '{id}'"),
            AppError::StorageUnavailable(detail) => {
                tracing::error!("Storage unavailable: {}", detail);
                "Database not available".into()
            }
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                "An unexpected error occurred".into()
            }
        };
        ErrorBody { code, message }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(self.into_body())).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidId(id) => AppError::InvalidId(id),
            StoreError::NotFound(_) => AppError::NotFound("Archive not found".into()),
            StoreError::Unavailable(detail) => AppError::StorageUnavailable(detail),
            other => AppError::Internal(other.to_string()),
        }
    }
}

impl From<GenerateError> for AppError {
    fn from(err: GenerateError) -> Self {
        match err {
            GenerateError::InvalidPackageName(_) => AppError::Validation(err.to_string()),
            other => AppError::Internal(other.to_string()),
        }
    }
}
