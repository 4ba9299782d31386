use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::domain::errors::ProjectionError;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    UnprocessableEntity(String),
    BadGateway(String),
    Internal(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::UnprocessableEntity(msg) => write!(f, "Unprocessable: {}", msg),
            ApiError::BadGateway(msg) => write!(f, "Bad gateway: {}", msg),
            ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, kind, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::UnprocessableEntity(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable", msg)
            }
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, "bad_gateway", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal", msg),
        };

        let body = Json(json!({
            "kind": kind,
            "message": message
        }));

        (status, body).into_response()
    }
}

// Bad caller input is a client error; operator misconfiguration is 422 so
// it stays visible to callers; holiday-source failures are dependency
// errors; storage failures stay opaque.
impl From<ProjectionError> for ApiError {
    fn from(err: ProjectionError) -> Self {
        match err {
            ProjectionError::InvalidRequest(_) => ApiError::BadRequest(err.to_string()),
            ProjectionError::NotConfigured(_)
            | ProjectionError::InvalidSchedule(_)
            | ProjectionError::NoWorkingDaysConfigured => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            ProjectionError::HolidaySource(_) => ApiError::BadGateway(err.to_string()),
            ProjectionError::Storage(_) => ApiError::Internal(err.to_string()),
        }
    }
}

// Convert from sqlx errors
impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Internal(format!("Database error: {}", err))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
