#![allow(dead_code)]

use sqlx::SqlitePool;
use std::sync::Arc;

use slugline::application::services::ShortenService;
use slugline::domain::repositories::MappingRepository;
use slugline::infrastructure::persistence::SqliteMappingRepository;
use slugline::state::AppState;

pub const TEST_BASE_URL: &str = "http://sho.rt";

/// Builds the application state over a test pool, creating the schema the
/// same way the server does at startup.
pub async fn create_test_state(pool: SqlitePool) -> AppState {
    let repository = Arc::new(SqliteMappingRepository::new(Arc::new(pool)));
    repository.initialize().await.expect("schema init failed");

    let shorten_service = Arc::new(ShortenService::new(repository, TEST_BASE_URL));

    AppState { shorten_service }
}

pub async fn create_test_mapping(pool: &SqlitePool, slug: &str, url: &str) {
    sqlx::query("INSERT INTO urlshortener (original_url, short_slug, short_url) VALUES (?1, ?2, ?3)")
        .bind(url)
        .bind(slug)
        .bind(format!("{TEST_BASE_URL}/{slug}"))
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_rows_for_url(pool: &SqlitePool, url: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urlshortener WHERE original_url = ?1")
        .bind(url)
        .fetch_one(pool)
        .await
        .unwrap()
}
