//! Core types for the booking admin assistant.
//!
//! This crate defines the pieces every other crate builds on: the chat
//! message type that goes on the wire and into history, the shared
//! conversation history buffer, the [`Assistant`] trait implemented by
//! reply-producing backends, error types, and the built-in system prompt.

mod assistant;
mod error;
mod history;
mod message;
mod prompt;

pub use assistant::Assistant;
pub use error::AssistantError;
pub use history::{ConversationHistory, DEFAULT_MAX_MESSAGES};
pub use message::ChatMessage;
pub use prompt::{hash_prompt, SYSTEM_PROMPT};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
