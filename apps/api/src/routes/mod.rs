pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::extract::handlers::handle_upload;
use crate::state::AppState;
use crate::syllabus::handlers::handle_parse;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/upload", post(handle_upload))
        .route("/api/v1/parse", post(handle_parse))
        .with_state(state)
}
