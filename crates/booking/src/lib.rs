//! Booking domain module.
//!
//! Booking records and their status lifecycle, implemented purely as
//! deterministic domain logic (no IO, no HTTP, no storage).

pub mod booking;

pub use booking::{Booking, BookingStatus};
