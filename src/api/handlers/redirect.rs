//! Handler for the short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short slug to its original URL.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Responses
///
/// - **308 Permanent Redirect** with `Location: <original_url>` - mappings
///   are immutable, so clients may cache the redirect indefinitely
/// - **404 Not Found** - `{"error": "URL not found"}`
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    match state.shorten_service.resolve(&slug).await? {
        Some(original_url) => {
            debug!(%slug, "redirecting");
            Ok(Redirect::permanent(&original_url))
        }
        None => Err(AppError::NotFound),
    }
}
