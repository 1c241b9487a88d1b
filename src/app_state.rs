//! Shared application state injected into all Axum handlers.

use std::sync::Arc;
use std::time::Instant;

use crate::domain::CatalogStore;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Event and club collections.
    pub catalog: Arc<CatalogStore>,
    /// Moment the service started; the health probe reports uptime from it.
    pub started_at: Instant,
}

impl AppState {
    /// Creates state around `catalog`, marking now as the start time.
    #[must_use]
    pub fn new(catalog: Arc<CatalogStore>) -> Self {
        Self {
            catalog,
            started_at: Instant::now(),
        }
    }
}
