use axum::{
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api;
use crate::services::SlaService;

#[derive(Clone)]
pub struct AppState {
    pub sla_service: SlaService,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/sla/projection", post(api::sla::project_completion))
        .route("/api/sla/deadline", post(api::sla::estimated_closing))
        .route("/api/sla/elapsed", get(api::sla::elapsed_business_hours))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
