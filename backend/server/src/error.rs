use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

/// Input problems the caller can fix. Never retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid city")]
    InvalidCity,

    #[error("Invalid timestamp")]
    InvalidTimestamp,

    #[error("Missing date parameters")]
    MissingDateRange,

    #[error("Invalid date")]
    InvalidDate,

    #[error("Invalid command")]
    InvalidCommand,

    #[error("Malformed payload")]
    MalformedPayload,
}

/// The store was unreachable or a statement failed. Surfaced as-is.
#[derive(Error, Debug)]
#[error("Database error: {0}")]
pub struct StorageError(#[from] pub sqlx::Error);

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            AppError::Validation(e) => {
                warn!("Rejected request: {e}");
                e.to_string()
            }
            AppError::Storage(e) => {
                error!("{e}");
                "Database error".to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
