//! Shared state for the axum application.

use std::sync::Arc;

use tax_core::TaxEngine;

/// State passed to every route handler.
///
/// The engine is immutable, so handlers share it without locking.
#[derive(Debug, Clone)]
pub struct AppState {
    pub engine: Arc<TaxEngine>,
}

impl AppState {
    pub fn new(engine: TaxEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TaxEngine::nta_2025())
    }
}
