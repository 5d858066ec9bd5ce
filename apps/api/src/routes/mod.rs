pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assistant::handlers as assistant;
use crate::ats::handlers as ats;
use crate::export::handlers as export;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Résumé CRUD
        .route(
            "/api/resumes",
            get(resumes::handle_list).post(resumes::handle_create),
        )
        .route(
            "/api/resumes/:id",
            get(resumes::handle_get)
                .put(resumes::handle_update)
                .delete(resumes::handle_delete),
        )
        // Scoring and export
        .route("/api/analyze-ats", post(ats::handle_analyze))
        .route("/api/generate/:format", post(export::handle_generate))
        // Writing assistant
        .route(
            "/api/assistant/suggestions",
            post(assistant::handle_suggestions),
        )
        .route(
            "/api/assistant/generate",
            post(assistant::handle_generate_content),
        )
        .route("/api/assistant/apply", post(assistant::handle_apply))
        .with_state(state)
}
