pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::screening::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Screening API
        .route("/api/v1/screen", post(handlers::handle_screen))
        .route("/api/v1/candidates", get(handlers::handle_list_candidates))
        .route(
            "/api/v1/candidates/:id",
            get(handlers::handle_get_candidate),
        )
        .route(
            "/api/v1/candidates/search",
            post(handlers::handle_search),
        )
        // Resume utilities
        .route(
            "/api/v1/resume/health-check",
            post(handlers::handle_resume_health),
        )
        .route("/api/v1/resume/summary", post(handlers::handle_summary))
        .with_state(state)
}
