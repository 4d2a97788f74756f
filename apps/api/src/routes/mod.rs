pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::demos::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/models", get(handlers::handle_list_models))
        // 10-K Decoder
        .route("/api/v1/filings", get(handlers::handle_view_filings))
        .route("/api/v1/filings/ask", post(handlers::handle_ask_filings))
        // Contract Companion
        .route("/api/v1/contracts", get(handlers::handle_view_contract))
        .route("/api/v1/contracts/ask", post(handlers::handle_ask_contract))
        // Plan Comparison
        .route("/api/v1/plans", get(handlers::handle_list_plans))
        .route(
            "/api/v1/plans/questions",
            get(handlers::handle_plan_questions),
        )
        .route("/api/v1/plans/compare", post(handlers::handle_compare_plans))
        .with_state(state)
}
