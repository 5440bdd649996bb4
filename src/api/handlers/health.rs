//! Handler for the health check endpoint.

use axum::Json;

use crate::api::dto::health::HealthResponse;

/// Reports that the service is up.
///
/// # Endpoint
///
/// `GET /`
///
/// # Response
///
/// ```json
/// {"message": "URL shortener is up and running"}
/// ```
///
/// Always returns 200; the process refuses to start at all when the store
/// is unavailable, so a responding instance is a serving instance.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "URL shortener is up and running".to_string(),
    })
}
