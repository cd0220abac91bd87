//! Catalog domain module.
//!
//! This crate contains the event record and the filter predicate, implemented
//! purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod event;
pub mod filter;

pub use event::{Event, EventDraft};
pub use filter::EventFilter;
