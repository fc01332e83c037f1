use std::path::Path;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::features::debate::handle_debate;
use crate::features::generation::handle_generate_debate;
use crate::server::AppState;
use crate::server::health::handle_healthcheck;

/// Routes both debate endpoints; when `static_dir` exists its files (and
/// `index.html` at `/`) answer every other path.
pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let mut router = Router::new()
        .route("/api/health", get(handle_healthcheck))
        .route("/debate", post(handle_debate))
        .route("/generate_debate", post(handle_generate_debate));

    if let Some(dir) = static_dir.filter(|dir| dir.is_dir()) {
        tracing::info!(target: "server", dir = %dir.display(), "serving static frontend");
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
