pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::export::handlers as export_handlers;
use crate::generation::handlers as generation_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation API
        .route(
            "/api/v1/templates/generate",
            post(generation_handlers::handle_generate_template),
        )
        .route(
            "/api/v1/templates/content",
            post(generation_handlers::handle_generate_content),
        )
        // Export API (placeholder renderer)
        .route("/api/v1/export", post(export_handlers::handle_export))
        .with_state(state)
}
