//! Repository trait for URL mapping data access.

use crate::domain::entities::UrlMapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the slug store.
///
/// Lookups and inserts are deliberately separate steps (check-then-act)
/// rather than a single upsert: the service layer needs to distinguish
/// "already shortened this URL" from "brand new URL" because the two cases
/// produce different response semantics. The resulting race window on
/// duplicate URLs is accepted; the slug uniqueness constraint is the hard
/// guarantee.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteMappingRepository`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Ensures the backing table and index exist.
    ///
    /// Idempotent; called once at process start. A failure here is fatal:
    /// the process must not serve traffic without a working store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn initialize(&self) -> Result<(), AppError>;

    /// Finds a mapping by its short slug. Exact match, no side effects.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(UrlMapping))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Finds a mapping by its original URL.
    ///
    /// Used by the dedup check before generating a new slug. Exact match on
    /// the caller-supplied string; no normalization is applied.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] on storage errors.
    async fn find_by_original_url(&self, url: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Persists a new mapping as a single atomic row write.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::SlugCollision`] if `short_slug` already exists
    /// (uniqueness constraint). Returns [`AppError::Database`] on other
    /// storage errors.
    async fn insert(&self, mapping: &UrlMapping) -> Result<(), AppError>;
}
