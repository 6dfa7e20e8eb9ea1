//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

/// Admin chat server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Booking API base URL.
    pub booking_api_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `CHAT_ADDR` | Server bind address | `0.0.0.0:8087` |
    /// | `BOOKING_API_URL` | Booking API base URL | `http://localhost:3000` |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("CHAT_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8087".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let booking_api_url =
            env::var("BOOKING_API_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());

        Ok(Self {
            addr,
            booking_api_url,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid CHAT_ADDR format")]
    InvalidAddr,
}
