//! Application state for the web layer.

use std::sync::Arc;

use crate::catalog::Catalog;

/// Shared application state.
///
/// The catalog is loaded once at startup and shared immutably across
/// request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The materialized vacancy catalog
    pub catalog: Arc<Catalog>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }
}
