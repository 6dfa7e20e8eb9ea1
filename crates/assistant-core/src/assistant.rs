//! The trait implemented by reply-producing backends.

use async_trait::async_trait;

use crate::error::AssistantError;

/// A chat backend that turns one operator message into one reply.
///
/// Expected failures (missing credentials, unreachable collaborators) are
/// folded into the reply text by the implementation; `Err` is reserved for
/// unexpected internal failures and surfaces as a server error.
#[async_trait]
pub trait Assistant: Send + Sync {
    /// Produce the reply for a single operator message.
    async fn handle_message(&self, message: &str) -> Result<String, AssistantError>;

    /// Backend name for logging.
    fn name(&self) -> &str;
}
