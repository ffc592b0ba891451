//! Router configuration for the board API.

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_reply, create_thread, delete_reply, delete_thread, get_thread, list_threads,
    report_reply, report_thread, AppState,
};

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    let api_routes = Router::new()
        .route(
            "/threads/:board",
            post(create_thread)
                .get(list_threads)
                .put(report_thread)
                .delete(delete_thread),
        )
        .route(
            "/replies/:board",
            post(create_reply)
                .get(get_thread)
                .put(report_reply)
                .delete(delete_reply),
        );

    Router::new()
        .nest("/api", api_routes)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

/// Plain-text fallback for unmatched routes.
async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_health_router() {
        let _router = create_health_router();
        // Should not panic
    }
}
