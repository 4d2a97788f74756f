use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::completion::{CompletionError, UnsupportedModel};
use crate::pipeline::prompt::PromptError;
use crate::pipeline::PipelineError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NoData(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    UnsupportedModel(#[from] UnsupportedModel),

    #[error("Prompt too large: {actual} characters (limit {limit})")]
    PromptTooLarge { actual: usize, limit: usize },

    #[error("No result returned")]
    NoResult,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),
}

impl AppError {
    /// Maps a pipeline failure, naming the data that was missing for `NoData`.
    pub fn from_pipeline(err: PipelineError, what: &str) -> Self {
        match err {
            PipelineError::NoData => AppError::NoData(format!("No {what} data available")),
            PipelineError::Prompt(PromptError::TooLarge { actual, limit }) => {
                AppError::PromptTooLarge { actual, limit }
            }
            PipelineError::Prompt(e) => AppError::Validation(e.to_string()),
            PipelineError::Completion(e) => AppError::Completion(e),
            PipelineError::NoResult => AppError::NoResult,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NoData(msg) => (StatusCode::NOT_FOUND, "NO_DATA", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::UnsupportedModel(e) => {
                (StatusCode::BAD_REQUEST, "UNSUPPORTED_MODEL", e.to_string())
            }
            AppError::PromptTooLarge { .. } => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "PROMPT_TOO_LARGE",
                self.to_string(),
            ),
            AppError::NoResult => {
                tracing::warn!("Completion returned no result");
                (
                    StatusCode::BAD_GATEWAY,
                    "NO_RESULT",
                    "No result returned".to_string(),
                )
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Completion(e) => {
                tracing::error!("Completion error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "COMPLETION_ERROR",
                    "The completion service call failed".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
