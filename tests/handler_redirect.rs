mod common;

use axum::{Router, routing::get};
use axum_test::TestServer;
use sqlx::SqlitePool;

use slugline::api::handlers::redirect_handler;

fn redirect_app(state: slugline::state::AppState) -> Router {
    Router::new()
        .route("/{slug}", get(redirect_handler))
        .with_state(state)
}

#[sqlx::test(migrations = false)]
async fn test_redirect_success(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone()).await;
    let server = TestServer::new(redirect_app(state)).unwrap();

    common::create_test_mapping(&pool, "aB3xYz", "https://example.com/target").await;

    let response = server.get("/aB3xYz").await;

    assert_eq!(response.status_code(), 308);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[sqlx::test(migrations = false)]
async fn test_redirect_not_found(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone()).await;
    let server = TestServer::new(redirect_app(state)).unwrap();

    let response = server.get("/doesnotexist").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "URL not found");
}

#[sqlx::test(migrations = false)]
async fn test_redirect_is_exact_match(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone()).await;
    let server = TestServer::new(redirect_app(state)).unwrap();

    common::create_test_mapping(&pool, "aB3xYz", "https://example.com/target").await;

    // Slugs are case-sensitive; a different casing is a different slug.
    let response = server.get("/AB3XYZ").await;

    response.assert_status_not_found();
}
