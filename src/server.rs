//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, schema initialization, and the Axum server
//! lifecycle.

use crate::config::Config;
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::persistence::SqliteMappingRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::net::SocketAddr;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (the database file is created if absent)
/// - Mapping table schema
/// - Axum HTTP server with graceful shutdown on ctrl-c
///
/// # Errors
///
/// Returns an error if the database connection or schema initialization
/// fails (the process must not serve traffic without a working store), if
/// the listen address is invalid, or on a server runtime error.
pub async fn run(config: Config) -> Result<()> {
    let connect_options = SqliteConnectOptions::from_str(&config.database_url)
        .context("invalid DATABASE_URL")?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .connect_with(connect_options)
        .await
        .context("failed to open database")?;
    tracing::info!("Connected to database");

    let repository = Arc::new(SqliteMappingRepository::new(Arc::new(pool)));
    repository
        .initialize()
        .await
        .map_err(|e| anyhow::anyhow!("failed to initialize schema: {e}"))?;
    tracing::info!("Schema ready");

    let shorten_service = Arc::new(crate::application::services::ShortenService::new(
        repository,
        config.base_url.clone(),
    ));

    let state = AppState { shorten_service };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Resolves when ctrl-c is received, letting in-flight requests drain.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to install ctrl-c handler: {e}");
        return;
    }
    tracing::info!("Shutdown signal received");
}
