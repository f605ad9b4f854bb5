//! Application state for the web layer.

use std::sync::Arc;

use crate::registry::StopRegistry;

/// Shared application state.
///
/// The registry is fully loaded before the server starts and is only read
/// by handlers, so it is shared without a lock.
#[derive(Clone)]
pub struct AppState {
    /// Loaded stops and their name index
    pub registry: Arc<StopRegistry>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(registry: StopRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}
