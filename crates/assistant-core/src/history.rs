//! Conversation history management.
//!
//! This service keeps one shared conversation for the admin panel, so the
//! history is a single rolling buffer rather than a per-user map. Access is
//! serialized through an async lock and the buffer is trimmed from the
//! front once it exceeds its cap.

use tokio::sync::RwLock;

use crate::message::ChatMessage;

/// Default maximum number of messages kept (20 exchanges).
pub const DEFAULT_MAX_MESSAGES: usize = 40;

/// Shared rolling conversation history.
///
/// Each exchange appends the user message and the assistant reply; once the
/// buffer exceeds `max_messages`, the oldest entries are dropped.
///
/// # Example
///
/// ```rust
/// use assistant_core::ConversationHistory;
///
/// #[tokio::main(flavor = "current_thread")]
/// async fn main() {
///     let history = ConversationHistory::new(4);
///
///     history.record_exchange("Hello", "Hi there!").await;
///     history.record_exchange("How are bookings?", "Looking good.").await;
///
///     let messages = history.snapshot().await;
///     assert_eq!(messages.len(), 4); // 2 exchanges = 4 messages
/// }
/// ```
#[derive(Debug)]
pub struct ConversationHistory {
    /// Message buffer in conversation order.
    messages: RwLock<Vec<ChatMessage>>,
    /// Maximum number of messages to keep.
    max_messages: usize,
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_MESSAGES)
    }
}

impl ConversationHistory {
    /// Create a new conversation history keeping at most `max_messages`.
    pub fn new(max_messages: usize) -> Self {
        Self {
            messages: RwLock::new(Vec::new()),
            max_messages,
        }
    }

    /// Get an ordered copy of the conversation so far.
    pub async fn snapshot(&self) -> Vec<ChatMessage> {
        let messages = self.messages.read().await;
        messages.clone()
    }

    /// Add a user message and assistant reply to the history.
    ///
    /// Both entries are appended atomically, then the buffer is trimmed
    /// from the front to the configured cap.
    pub async fn record_exchange(&self, user_text: &str, assistant_text: &str) {
        let mut messages = self.messages.write().await;

        messages.push(ChatMessage::user(user_text));
        messages.push(ChatMessage::assistant(assistant_text));

        if messages.len() > self.max_messages {
            let to_remove = messages.len() - self.max_messages;
            messages.drain(0..to_remove);
        }
    }

    /// Number of messages currently held.
    pub async fn len(&self) -> usize {
        let messages = self.messages.read().await;
        messages.len()
    }

    /// Whether the history is empty.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Clear the conversation.
    pub async fn clear(&self) {
        let mut messages = self.messages.write().await;
        messages.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_record_and_snapshot() {
        let history = ConversationHistory::new(10);

        history.record_exchange("Hello", "Hi there!").await;
        history
            .record_exchange("How are bookings?", "Looking good.")
            .await;

        let messages = history.snapshot().await;
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].role, "user");
        assert_eq!(messages[0].content, "Hello");
        assert_eq!(messages[1].role, "assistant");
        assert_eq!(messages[1].content, "Hi there!");
        assert_eq!(messages[3].content, "Looking good.");
    }

    #[tokio::test]
    async fn test_trims_oldest_messages() {
        let history = ConversationHistory::new(4); // Keep only 2 exchanges

        history.record_exchange("First", "Reply 1").await;
        history.record_exchange("Second", "Reply 2").await;
        history.record_exchange("Third", "Reply 3").await;

        let messages = history.snapshot().await;
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0].content, "Second");
        assert_eq!(messages[1].content, "Reply 2");
        assert_eq!(messages[2].content, "Third");
        assert_eq!(messages[3].content, "Reply 3");
    }

    #[tokio::test]
    async fn test_cap_holds_over_many_exchanges() {
        let history = ConversationHistory::new(40);

        for i in 0..21 {
            history
                .record_exchange(&format!("question {}", i), &format!("answer {}", i))
                .await;
        }

        let messages = history.snapshot().await;
        assert_eq!(messages.len(), 40);
        // The first exchange fell off; order is preserved from there
        assert_eq!(messages[0].content, "question 1");
        assert_eq!(messages[39].content, "answer 20");
    }

    #[tokio::test]
    async fn test_len_and_clear() {
        let history = ConversationHistory::new(10);
        assert!(history.is_empty().await);

        history.record_exchange("Hello", "Hi!").await;
        assert_eq!(history.len().await, 2);

        history.clear().await;
        assert!(history.is_empty().await);
    }
}
