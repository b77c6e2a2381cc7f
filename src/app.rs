use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/generate", post(handlers::generate))
        .route("/api/health", get(handlers::health))
        .with_state(state)
}
