//! Handler for the shorten endpoint.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};

use crate::api::dto::shorten::{ShortenQuery, ShortenRequest, ShortenResponse};
use crate::application::services::ShortenOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL for the submitted original URL.
///
/// # Endpoint
///
/// `POST /`
///
/// The URL is taken from the JSON body (`{"url": "..."}`) when one is sent,
/// otherwise from the `?url=` query parameter. A request carrying neither is
/// rejected the same way as a malformed URL.
///
/// # Responses
///
/// - **201 Created** - new mapping, body `{original_url, short_slug, short_url}`
/// - **200 OK** - the URL was already shortened; same body shape, existing slug
/// - **400 Bad Request** - `{"error": "Invalid URL format"}`
pub async fn shorten_handler(
    State(state): State<AppState>,
    Query(query): Query<ShortenQuery>,
    body: Option<Json<ShortenRequest>>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let url = body
        .map(|Json(request)| request.url)
        .or(query.url)
        .ok_or(AppError::InvalidUrlFormat)?;

    match state.shorten_service.shorten(&url).await? {
        ShortenOutcome::Created(mapping) => Ok((StatusCode::CREATED, Json(mapping.into()))),
        ShortenOutcome::AlreadyExists(mapping) => Ok((StatusCode::OK, Json(mapping.into()))),
    }
}
