//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ShortenService;
use crate::infrastructure::persistence::SqliteMappingRepository;

/// State shared by all HTTP handlers.
///
/// The service (and through it, the store) is an explicitly constructed,
/// injected dependency rather than ambient global state, which keeps the
/// core testable without the HTTP layer.
#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService<SqliteMappingRepository>>,
}
