pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod utils;

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use generator::ArchiveBuilder;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::{AppConfig, CorsConfig, StorageBackend};
use crate::state::AppState;
use crate::store::{
    DatabaseGenerationStore, GenerationStore, MemoryGenerationStore, UnavailableGenerationStore,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Replix API",
        version = "1.0.0",
        description = "Generate Minecraft plugin projects as downloadable ZIP archives"
    ),
    tags(
        (name = "Generation", description = "Generate, download and list plugin archives"),
        (name = "Service", description = "Liveness and diagnostics"),
    ),
)]
struct ApiDoc;

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let cors = cors_layer(&state.config.server.cors);

    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(routes::service_routes())
        .nest("/api", routes::api_routes())
        .split_for_parts();

    router
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()))
        .merge(Scalar::with_url("/scalar", api))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(config.max_age));

    if config.allow_origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = config
            .allow_origins
            .iter()
            .filter_map(|o| match o.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(origin = %o, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        layer.allow_origin(AllowOrigin::list(origins))
    }
}

/// Set up the configured store.
///
/// Storage availability is decided here, once. When the database cannot be
/// reached the service still starts and every storage call reports
/// unavailability.
pub async fn init_store(config: &AppConfig) -> Arc<dyn GenerationStore> {
    match config.storage.backend {
        StorageBackend::Memory => {
            info!("Using in-memory generation store");
            Arc::new(MemoryGenerationStore::new())
        }
        StorageBackend::Database => {
            let Some(url) = config.database.connection_url() else {
                warn!("No database URL configured; storage is unavailable");
                return Arc::new(UnavailableGenerationStore::new("no database configured"));
            };
            match database::init_db(&url, &config.database).await {
                Ok(db) => {
                    info!("Database connected");
                    Arc::new(DatabaseGenerationStore::new(db))
                }
                Err(e) => {
                    error!("Database initialization failed: {e}");
                    Arc::new(UnavailableGenerationStore::new(e.to_string()))
                }
            }
        }
    }
}

/// Assemble application state from configuration.
pub async fn build_state(config: AppConfig) -> Result<AppState, generator::GenerateError> {
    let store = init_store(&config).await;
    Ok(AppState {
        store,
        builder: Arc::new(ArchiveBuilder::new()?),
        config,
    })
}
