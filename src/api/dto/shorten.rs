//! DTOs for the shorten endpoint.

use serde::{Deserialize, Serialize};

use crate::domain::entities::UrlMapping;

/// JSON request body for shortening a URL.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    /// The original URL to shorten (must start with `http://` or `https://`).
    pub url: String,
}

/// Query parameters accepted as an alternative to the JSON body.
#[derive(Debug, Default, Deserialize)]
pub struct ShortenQuery {
    pub url: Option<String>,
}

/// Response body for both the created and the already-shortened case; the
/// HTTP status code (201 vs 200) tells them apart.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub original_url: String,
    pub short_slug: String,
    pub short_url: String,
}

impl From<UrlMapping> for ShortenResponse {
    fn from(mapping: UrlMapping) -> Self {
        Self {
            original_url: mapping.original_url,
            short_slug: mapping.short_slug,
            short_url: mapping.short_url,
        }
    }
}
