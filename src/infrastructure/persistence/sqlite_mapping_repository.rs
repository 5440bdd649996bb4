//! SQLite implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::MappingRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation;

/// SQLite repository for mapping storage and retrieval.
///
/// Uses bound parameters throughout; the `UNIQUE` constraint on `short_slug`
/// is enforced by SQLite at the transaction boundary, which makes it the
/// correctness backstop for concurrent inserts.
pub struct SqliteMappingRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for SqliteMappingRepository {
    async fn initialize(&self) -> Result<(), AppError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS urlshortener (
                original_url TEXT NOT NULL,
                short_slug   TEXT NOT NULL UNIQUE,
                short_url    TEXT NOT NULL
            )
            "#,
        )
        .execute(self.pool.as_ref())
        .await?;

        // Dedup lookups scan by original_url; the UNIQUE constraint already
        // indexes short_slug.
        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_urlshortener_original_url
            ON urlshortener (original_url)
            "#,
        )
        .execute(self.pool.as_ref())
        .await?;

        Ok(())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT original_url, short_slug, short_url
            FROM urlshortener
            WHERE short_slug = ?1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn find_by_original_url(&self, url: &str) -> Result<Option<UrlMapping>, AppError> {
        let row = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT original_url, short_slug, short_url
            FROM urlshortener
            WHERE original_url = ?1
            "#,
        )
        .bind(url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn insert(&self, mapping: &UrlMapping) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            INSERT INTO urlshortener (original_url, short_slug, short_url)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&mapping.original_url)
        .bind(&mapping.short_slug)
        .bind(&mapping.short_url)
        .execute(self.pool.as_ref())
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(e) if is_unique_violation(&e) => Err(AppError::SlugCollision),
            Err(e) => Err(e.into()),
        }
    }
}
