pub mod health;
pub mod page;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::page_handler))
        .route("/health", get(health::health_handler))
        .route("/api/v1/leads/analyze", post(handlers::handle_analyze_lead))
        .with_state(state)
}
