//! Simple test for OpenRouterBrain chat completion.
//!
//! Run with: cargo run -p openrouter-brain --example test_chat
//! Or with a custom message: cargo run -p openrouter-brain --example test_chat -- "Your message here"
//!
//! Make sure to set environment variables in .env:
//!   OPENROUTER_API_KEY - OpenRouter API key for authentication
//!   BOOKING_API_URL    - booking backend for the tools (default: http://localhost:3000)

use openrouter_brain::{Assistant, OpenRouterBrain};
use std::env;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Get message from command line args or use default
    let args: Vec<String> = env::args().collect();
    let message_text = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        "How many bookings do we have? get the latest five.".to_string()
    };

    println!("Initializing OpenRouterBrain...");
    let brain = OpenRouterBrain::from_env()?;

    println!("Brain initialized: {}", brain.name());
    println!("API URL: {}", brain.config().api_url);
    println!("Model: {}", brain.config().model);
    println!("API key configured: {}", brain.config().api_key.is_some());
    if let Some(ref prompt) = brain.config().system_prompt {
        let preview: String = prompt.chars().take(50).collect();
        let suffix = if prompt.len() > 50 { "..." } else { "" };
        println!("System prompt override: \"{}{}\"", preview, suffix);
    } else {
        println!("System prompt: (built-in)");
    }
    println!();

    println!("Sending: \"{}\"", message_text);
    println!("Waiting for response...\n");

    let response = brain.handle_message(&message_text).await?;

    println!("=== Response ===");
    println!("{}", response);
    println!("================");

    Ok(())
}
