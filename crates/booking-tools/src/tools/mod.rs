//! Built-in booking-system tools.

mod bookings;
mod content;
mod occupancy;
mod report;

pub use bookings::GetBookings;
pub use content::{GetContentBlocks, UpdateContentBlock};
pub use occupancy::CalculateOccupancy;
pub use report::BookingReport;
