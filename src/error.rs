use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failure taxonomy for the whole service.
///
/// `MalformedPlan` and `UnexpectedShape` are recovered inside the meal-plan
/// normalizer (degrade to an empty plan); per-row ingredient decode failures
/// are recovered inside the grocery aggregator. Only `Precondition`,
/// `Persistence` and `Network` are expected to reach a client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("malformed meal plan: {0}")]
    MalformedPlan(String),

    #[error("unexpected meal plan shape: {0}")]
    UnexpectedShape(&'static str),

    #[error("precondition failed: {0}")]
    Precondition(&'static str),

    #[error("persistence failure: {0}")]
    Persistence(String),

    #[error("storage transport failure: {0}")]
    Network(String),
}

impl From<sqlx::Error> for ApiError {
    fn from(e: sqlx::Error) -> Self {
        ApiError::Persistence(e.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(e: anyhow::Error) -> Self {
        ApiError::Persistence(format!("{e:#}"))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::MalformedPlan(e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Precondition(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Persistence(_) | ApiError::Network(_) => StatusCode::BAD_GATEWAY,
            ApiError::MalformedPlan(_) | ApiError::UnexpectedShape(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (
            status,
            Json(json!({ "status": "error", "detail": self.to_string() })),
        )
            .into_response()
    }
}
