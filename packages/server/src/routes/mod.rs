use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

/// Generation endpoints, mounted under `/api`.
pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::generation::generate_plugin))
        .routes(routes!(handlers::generation::download_plugin))
        .routes(routes!(handlers::generation::list_history))
}

/// Liveness and diagnostic endpoints, mounted at the root.
pub fn service_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::health::root))
        .routes(routes!(handlers::health::diagnostics))
}
