//! Application error taxonomy and HTTP response mapping.
//!
//! Errors carry just enough structure for the service layer to branch on
//! ([`AppError::SlugCollision`] drives the regeneration loop); everything else
//! renders as a flat `{"error": "<message>"}` JSON body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// The submitted URL does not start with an accepted scheme.
    #[error("Invalid URL format")]
    InvalidUrlFormat,

    /// No mapping exists for the requested slug.
    #[error("URL not found")]
    NotFound,

    /// The storage layer rejected an insert because the slug already exists.
    /// Recovered internally by regenerating; never a routine client error.
    #[error("short slug already exists")]
    SlugCollision,

    /// Any other failure from the storage driver.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidUrlFormat => {
                (StatusCode::BAD_REQUEST, "Invalid URL format".to_string())
            }
            AppError::NotFound => (StatusCode::NOT_FOUND, "URL not found".to_string()),
            AppError::SlugCollision | AppError::Database(_) | AppError::Internal(_) => {
                tracing::error!("request failed: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = ErrorBody { error: message };

        (status, Json(body)).into_response()
    }
}
