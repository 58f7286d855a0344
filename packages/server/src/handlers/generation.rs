use axum::Json;
use axum::body::Body;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use chrono::Utc;
use generator::GenerateRequest;
use tracing::{info, instrument};

use crate::error::{AppError, ErrorBody};
use crate::extractors::json::AppJson;
use crate::models::generation::{
    GenerateResponse, GenerationSummary, HistoryQuery, HistoryResponse,
};
use crate::state::AppState;
use crate::store::NewGeneration;
use crate::utils::filename::{archive_filename, content_disposition_value};

#[utoipa::path(
    post,
    path = "/generate",
    tag = "Generation",
    operation_id = "generatePlugin",
    summary = "Generate a plugin project archive",
    description = "Renders the plugin manifest, entry class, one executor per command, a Maven \
        build file and a `.gitignore` into a ZIP archive, stores it and returns its ID. \
        Commands with blank names are skipped. Each call creates a new record.",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Archive generated", body = GenerateResponse),
        (status = 400, description = "Malformed package name or body (VALIDATION_ERROR)", body = ErrorBody),
        (status = 500, description = "Storage unavailable (STORAGE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, payload), fields(plugin_name = %payload.plugin_name))]
pub async fn generate_plugin(
    State(state): State<AppState>,
    AppJson(payload): AppJson<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    let archive = state.builder.build(&payload)?;
    let record = NewGeneration::new(&payload, archive, Utc::now());
    let archive_size = record.archive_size();

    let id = state.store.create(record).await?;
    info!(%id, archive_size, "Plugin archive generated");

    Ok(Json(GenerateResponse::new(id, archive_size)))
}

#[utoipa::path(
    get,
    path = "/download/{id}",
    tag = "Generation",
    operation_id = "downloadPlugin",
    summary = "Download a generated archive",
    description = "Returns the stored ZIP archive. The filename is the slugified plugin name.",
    params(("id" = String, Path, description = "Generation ID (UUID)")),
    responses(
        (status = 200, description = "ZIP archive (application/zip)"),
        (status = 400, description = "Malformed ID (INVALID_ID)", body = ErrorBody),
        (status = 404, description = "Archive not found (NOT_FOUND)", body = ErrorBody),
        (status = 500, description = "Storage unavailable (STORAGE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn download_plugin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, AppError> {
    let record = state.store.get(&id).await?;
    let filename = archive_filename(&record.metadata.plugin_name);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/zip")
        .header(header::CONTENT_LENGTH, record.archive.len().to_string())
        .header(
            header::CONTENT_DISPOSITION,
            content_disposition_value(&filename),
        )
        .body(Body::from(record.archive))
        .map_err(|e| AppError::Internal(format!("Failed to build response: {e}")))
}

#[utoipa::path(
    get,
    path = "/history",
    tag = "Generation",
    operation_id = "listHistory",
    summary = "List recent generations",
    description = "Returns the most recent generations, newest first, without archive payloads.",
    params(HistoryQuery),
    responses(
        (status = 200, description = "Recent generations", body = HistoryResponse),
        (status = 500, description = "Storage unavailable (STORAGE_UNAVAILABLE)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_history(
    State(state): State<AppState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<HistoryResponse>, AppError> {
    let limit = state.config.history.effective_limit(query.limit);
    let items = state.store.list(limit).await?;

    Ok(Json(HistoryResponse {
        items: items.into_iter().map(GenerationSummary::from).collect(),
    }))
}
