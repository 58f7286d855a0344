use axum::Json;
use axum::extract::State;
use tracing::{instrument, warn};

use crate::models::health::{DiagnosticsResponse, RootResponse};
use crate::state::AppState;
use crate::store::StoreError;

/// Longest error excerpt included in the diagnostic report.
const ERROR_EXCERPT_CHARS: usize = 50;

const MAX_TABLES: usize = 10;

#[utoipa::path(
    get,
    path = "/",
    tag = "Service",
    operation_id = "root",
    summary = "Liveness message",
    responses((status = 200, description = "Service is running", body = RootResponse)),
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Replix AI Backend is running".into(),
    })
}

#[utoipa::path(
    get,
    path = "/test",
    tag = "Service",
    operation_id = "diagnostics",
    summary = "Report backend and storage status",
    description = "Probes the storage backend. Probe failures are reported in the body; \
        this endpoint always answers 200.",
    responses((status = 200, description = "Diagnostic report", body = DiagnosticsResponse)),
)]
#[instrument(skip(state))]
pub async fn diagnostics(State(state): State<AppState>) -> Json<DiagnosticsResponse> {
    let db_config = &state.config.database;
    let mut report = DiagnosticsResponse {
        backend: "running".into(),
        database: "not available".into(),
        database_url: set_or_not(db_config.url.as_deref()),
        database_name: set_or_not(db_config.name.as_deref()),
        connection_status: "not connected".into(),
        tables: Vec::new(),
    };

    match state.store.probe().await {
        Ok(probe) => {
            report.database = match probe.database_name {
                Some(name) => format!("connected ({}: {name})", probe.backend),
                None => format!("connected ({})", probe.backend),
            };
            report.connection_status = "connected".into();
            report.tables = probe.tables.into_iter().take(MAX_TABLES).collect();
        }
        Err(StoreError::Unavailable(reason)) => {
            report.database = format!("not available: {}", excerpt(&reason));
        }
        Err(e) => {
            warn!("Storage probe failed: {e}");
            report.database = format!("error: {}", excerpt(&e.to_string()));
        }
    }

    Json(report)
}

fn set_or_not(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => "set".into(),
        _ => "not set".into(),
    }
}

fn excerpt(message: &str) -> String {
    message.chars().take(ERROR_EXCERPT_CHARS).collect()
}
