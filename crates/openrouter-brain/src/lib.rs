//! OpenRouter-backed assistant brain.
//!
//! This crate forwards operator messages to OpenRouter's chat-completions
//! API and pipes every model reply through the booking tool splicer, so
//! tool calls the model writes into its text execute before the reply is
//! returned.
//!
//! # Usage
//!
//! ```rust,no_run
//! use openrouter_brain::{Assistant, OpenRouterBrain};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let brain = OpenRouterBrain::from_env()?;
//!     let reply = brain.handle_message("How many bookings this week?").await?;
//!     println!("{}", reply);
//!     Ok(())
//! }
//! ```

mod api_types;
mod brain;
mod config;

pub use brain::{OpenRouterBrain, MISSING_KEY_REPLY};
pub use config::{OpenRouterConfig, OpenRouterConfigBuilder, DEFAULT_PROMPT_FILE};

// Re-export assistant-core types for convenience
pub use assistant_core::{async_trait, Assistant, AssistantError, ChatMessage, ConversationHistory};
