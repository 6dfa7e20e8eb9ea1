//! Application state shared across handlers.

use std::sync::Arc;

use assistant_core::Assistant;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// The assistant answering operator messages.
    pub assistant: Arc<dyn Assistant>,
}

impl AppState {
    /// Create new application state.
    pub fn new(assistant: Arc<dyn Assistant>) -> Self {
        Self { assistant }
    }
}
