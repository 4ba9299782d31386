use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{
    api::middleware::{ApiError, ApiResult},
    api::router::AppState,
    models::Priority,
};

// ========================================
// Request/Response Types
// ========================================

#[derive(Debug, Deserialize)]
pub struct ProjectSlaRequest {
    pub start_instant: String, // ISO-8601 without offset, e.g. "2024-05-06T08:00:00"
    pub remaining_hours: f64,
}

#[derive(Debug, Serialize)]
pub struct ProjectSlaResponse {
    pub completion_at: String,
}

#[derive(Debug, Deserialize)]
pub struct DeadlineRequest {
    pub created_at: String,
    pub priority: Priority,
    pub ans_hours: Option<f64>, // service's configured ANS budget, if any
}

#[derive(Debug, Serialize)]
pub struct DeadlineResponse {
    pub estimated_closing_at: String,
    pub budget_hours: f64,
}

#[derive(Debug, Deserialize)]
pub struct ElapsedQuery {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Serialize)]
pub struct ElapsedResponse {
    pub business_hours: f64,
}

// ========================================
// Handlers
// ========================================

/// POST /api/sla/projection - completion instant for an SLA hour budget
pub async fn project_completion(
    State(state): State<AppState>,
    Json(request): Json<ProjectSlaRequest>,
) -> ApiResult<Json<ProjectSlaResponse>> {
    let start = parse_instant(&request.start_instant)?;

    let completion = state
        .sla_service
        .project_completion(start, request.remaining_hours)
        .await?;

    Ok(Json(ProjectSlaResponse {
        completion_at: format_instant(completion),
    }))
}

/// POST /api/sla/deadline - priority-adjusted estimated closing instant
pub async fn estimated_closing(
    State(state): State<AppState>,
    Json(request): Json<DeadlineRequest>,
) -> ApiResult<Json<DeadlineResponse>> {
    let created_at = parse_instant(&request.created_at)?;

    let (closing, budget_hours) = state
        .sla_service
        .estimated_closing(created_at, request.priority, request.ans_hours)
        .await?;

    Ok(Json(DeadlineResponse {
        estimated_closing_at: format_instant(closing),
        budget_hours,
    }))
}

/// GET /api/sla/elapsed - working hours elapsed between two instants
pub async fn elapsed_business_hours(
    State(state): State<AppState>,
    Query(query): Query<ElapsedQuery>,
) -> ApiResult<Json<ElapsedResponse>> {
    let from = parse_instant(&query.from)?;
    let to = parse_instant(&query.to)?;

    let business_hours = state.sla_service.business_hours_between(from, to).await?;

    Ok(Json(ElapsedResponse { business_hours }))
}

fn parse_instant(value: &str) -> Result<NaiveDateTime, ApiError> {
    value
        .parse::<NaiveDateTime>()
        .map_err(|_| ApiError::BadRequest(format!("unparsable instant: {}", value)))
}

fn format_instant(value: NaiveDateTime) -> String {
    value.format("%Y-%m-%dT%H:%M:%S").to_string()
}
