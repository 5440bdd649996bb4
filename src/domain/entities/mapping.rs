//! URL mapping entity, the sole persisted record type.

/// A stored mapping between an original URL and its short slug.
///
/// Rows are immutable after creation: there is no update or delete path, and
/// the service never rewrites an existing mapping. `short_slug` is the lookup
/// key; `short_url` is a denormalized convenience value composed from the base
/// URL that was configured at creation time.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlMapping {
    pub original_url: String,
    pub short_slug: String,
    pub short_url: String,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(original_url: String, short_slug: String, short_url: String) -> Self {
        Self {
            original_url,
            short_slug,
            short_url,
        }
    }
}
