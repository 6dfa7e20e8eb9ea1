//! Error types for assistant implementations.

use thiserror::Error;

/// Errors that can occur while producing an assistant reply.
#[derive(Debug, Error)]
pub enum AssistantError {
    /// Invalid or incomplete configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Network-level failure reaching the completion API.
    #[error("Network error: {0}")]
    Network(String),

    /// The completion API returned an error or an unusable response.
    #[error("Completion failed: {0}")]
    Completion(String),
}
