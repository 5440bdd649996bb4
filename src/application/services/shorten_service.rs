//! URL shortening and resolution service.

use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::slug_generator::generate_slug;
use crate::utils::url_validator::validate_url_scheme;

/// Result of a shorten call.
///
/// The two cases carry the same row but map to different HTTP responses
/// (201 vs 200), so callers must be able to tell them apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortenOutcome {
    /// A new mapping was created for this URL.
    Created(UrlMapping),
    /// The URL had already been shortened; the existing mapping is returned.
    AlreadyExists(UrlMapping),
}

impl ShortenOutcome {
    /// Returns the mapping regardless of which case applies.
    pub fn mapping(&self) -> &UrlMapping {
        match self {
            ShortenOutcome::Created(m) | ShortenOutcome::AlreadyExists(m) => m,
        }
    }
}

/// Number of slug generation attempts before giving up.
///
/// With 57^6 possible slugs a collision is already rare; hitting this bound
/// repeatedly means the slug space is filling up and is treated as an
/// operational alarm, not a client error.
const MAX_SLUG_ATTEMPTS: usize = 5;

/// Service for creating and resolving short URLs.
///
/// Owns the business rules: scheme validation, dedup on the original URL,
/// slug generation with bounded collision retry, and slug resolution.
/// The store is an injected dependency so the service can be tested in
/// isolation from the HTTP layer.
pub struct ShortenService<R: MappingRepository> {
    repository: Arc<R>,
    base_url: String,
}

impl<R: MappingRepository> ShortenService<R> {
    /// Creates a new shortening service.
    ///
    /// `base_url` is the externally visible base used to compose short URLs;
    /// a trailing slash is trimmed so composition is uniform.
    pub fn new(repository: Arc<R>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            repository,
            base_url,
        }
    }

    /// Shortens a URL, returning the existing mapping when the URL was
    /// already shortened.
    ///
    /// # Flow
    ///
    /// 1. Validate that `url` begins with `http://` or `https://`
    /// 2. Dedup lookup on the original URL
    /// 3. Generate a slug, compose the short URL, insert
    /// 4. On a slug collision, regenerate and retry up to 5 attempts
    ///
    /// Two concurrent calls for the same URL can both miss the dedup check
    /// and create two rows; that duplicate is tolerated. Two calls can never
    /// commit the same slug: the loser of that race gets a collision from the
    /// store and retries with a fresh slug.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidUrlFormat`] for an unaccepted scheme,
    /// [`AppError::Internal`] when every generation attempt collides, and
    /// [`AppError::Database`] on storage errors.
    pub async fn shorten(&self, url: &str) -> Result<ShortenOutcome, AppError> {
        validate_url_scheme(url)?;

        if let Some(existing) = self.repository.find_by_original_url(url).await? {
            return Ok(ShortenOutcome::AlreadyExists(existing));
        }

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let slug = generate_slug();
            let mapping = UrlMapping::new(
                url.to_string(),
                slug.clone(),
                format!("{}/{}", self.base_url, slug),
            );

            match self.repository.insert(&mapping).await {
                Ok(()) => return Ok(ShortenOutcome::Created(mapping)),
                Err(AppError::SlugCollision) => {
                    tracing::warn!(attempt, slug = %mapping.short_slug, "slug collision, regenerating");
                }
                Err(e) => return Err(e),
            }
        }

        tracing::error!(
            attempts = MAX_SLUG_ATTEMPTS,
            "slug generation attempts exhausted"
        );
        Err(AppError::Internal(
            "failed to generate a unique slug".to_string(),
        ))
    }

    /// Resolves a slug to its original URL.
    ///
    /// Returns `None` when no mapping exists. No side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    pub async fn resolve(&self, slug: &str) -> Result<Option<String>, AppError> {
        Ok(self
            .repository
            .find_by_slug(slug)
            .await?
            .map(|mapping| mapping.original_url))
    }
}
