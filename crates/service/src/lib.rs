//! Service layer: in-memory stores and the booking/catalog operation surface.
//!
//! The stores own the only shared mutable state in the system. Everything
//! here is process-local; a real backend can replace the stores without
//! changing the caller-facing contract.

pub mod seed;
pub mod service;
pub mod store;

pub use service::{BookedEvent, TicketService};
pub use store::{InMemoryBookingStore, InMemoryEventStore};
