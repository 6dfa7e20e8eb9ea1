//! HTTP chat interface for the booking admin assistant.
//!
//! Accepts operator messages over HTTP, forwards them to OpenRouter, and
//! executes the booking tools the model calls in its replies.

mod config;
mod error;
mod routes;
mod state;

use std::sync::Arc;

use booking_tools::{default_registry, BookingApi, ToolSplicer};
use openrouter_brain::{OpenRouterBrain, OpenRouterConfig};
use tracing::info;

use crate::config::Config;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    // Load configuration
    let config = Config::from_env()?;
    info!(addr = %config.addr, "Starting admin chat server");

    // Build the tool splicer over the booking API
    let api = BookingApi::new(config.booking_api_url.clone())?;
    let splicer = ToolSplicer::new(default_registry(api))?;

    // Build the assistant
    let brain = OpenRouterBrain::new(OpenRouterConfig::from_env(), splicer)?;
    let state = AppState::new(Arc::new(brain));

    // Build router
    let app = routes::router().with_state(state);

    // Start server
    info!(addr = %config.addr, "Admin chat server listening");
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
