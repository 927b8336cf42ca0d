//! Application state for Axum handlers.

use std::sync::Arc;

use crate::config::AppConfig;

/// Shared application state.
///
/// The classifier is a pure function, so the only shared state is the
/// immutable configuration.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub const fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }
}
