//! Booking-system tools for the admin assistant.
//!
//! This crate provides the data tools the assistant can invoke from its
//! replies, plus the machinery around them:
//!
//! - [`ToolRegistry`]: name-based dispatch over [`Tool`] implementations
//! - [`call_pattern`] / [`scan_calls`]: find `name(args)` invocations in text
//! - [`ToolSplicer`]: execute detected calls and splice results into the reply
//! - [`BookingApi`]: HTTP client for the booking backend
//!
//! Five tools ship with the crate:
//!
//! - `get_bookings`: recent bookings, optionally filtered by status
//! - `generate_booking_report`: revenue and booking report over a date range
//! - `calculate_occupancy`: calendar occupancy between two dates
//! - `get_content_blocks`: website content blocks
//! - `update_content_block`: update one content block

mod client;
mod error;
mod registry;
mod scan;
mod splice;
mod tool;
pub mod tools;

pub use client::BookingApi;
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use scan::{call_pattern, scan_calls, DetectedCall};
pub use splice::ToolSplicer;
pub use tool::{ArgKind, ArgSpec, Tool, ToolArgs, ToolOutput};
pub use tools::{
    BookingReport, CalculateOccupancy, GetBookings, GetContentBlocks, UpdateContentBlock,
};

// Re-export for implementing the Tool trait.
pub use async_trait::async_trait;

/// Build a registry holding every booking tool, backed by one API client.
pub fn default_registry(api: BookingApi) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(GetBookings::new(api.clone()));
    registry.register(BookingReport::new(api.clone()));
    registry.register(CalculateOccupancy::new(api.clone()));
    registry.register(GetContentBlocks::new(api.clone()));
    registry.register(UpdateContentBlock::new(api));
    registry
}
