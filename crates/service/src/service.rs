//! The caller-facing operation surface.
//!
//! Every operation is `async` and begins with a single suspension point that
//! simulates request latency (zero by default). No operation holds a lock
//! across that suspension point, so state is only ever mutated synchronously
//! after it.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use stagepass_booking::Booking;
use stagepass_catalog::{Event, EventDraft, EventFilter};
use stagepass_core::{BookingId, DomainError, DomainResult, EventId, UserId};

use crate::store::{InMemoryBookingStore, InMemoryEventStore};

/// A booking paired with the event it refers to, for "my bookings" views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookedEvent {
    pub booking: Booking,
    pub event: Event,
}

/// Catalog, booking and inventory operations over the in-memory stores.
#[derive(Debug, Clone, Default)]
pub struct TicketService {
    events: Arc<InMemoryEventStore>,
    bookings: Arc<InMemoryBookingStore>,
    simulated_latency: Duration,
}

impl TicketService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an artificial delay at the start of every operation, standing in
    /// for a network round-trip to a real backend.
    pub fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }

    pub fn events(&self) -> &InMemoryEventStore {
        &self.events
    }

    pub fn bookings(&self) -> &InMemoryBookingStore {
        &self.bookings
    }

    async fn simulate_latency(&self) {
        if !self.simulated_latency.is_zero() {
            tokio::time::sleep(self.simulated_latency).await;
        }
    }

    pub async fn list_all_events(&self) -> Vec<Event> {
        self.simulate_latency().await;
        self.events.list()
    }

    /// Absence is not an error here; callers translate `None` into their own
    /// "not found" handling.
    pub async fn get_event(&self, id: EventId) -> Option<Event> {
        self.simulate_latency().await;
        self.events.get(id)
    }

    pub async fn query_events(&self, filter: &EventFilter) -> Vec<Event> {
        self.simulate_latency().await;
        self.events.query(filter)
    }

    pub async fn list_categories(&self) -> Vec<String> {
        self.simulate_latency().await;
        self.events.categories()
    }

    pub async fn list_organizer_events(&self, organizer_id: UserId) -> Vec<Event> {
        self.simulate_latency().await;
        self.events.list_by_organizer(organizer_id)
    }

    pub async fn create_event(&self, draft: EventDraft) -> DomainResult<Event> {
        self.simulate_latency().await;

        let event = draft.into_event()?;
        tracing::info!(event_id = %event.id, title = %event.title, "event created");
        self.events.insert(event.clone());
        Ok(event)
    }

    /// Book `quantity` tickets: decrement availability and append a confirmed
    /// booking, atomically from the caller's perspective.
    pub async fn book(
        &self,
        user_id: UserId,
        event_id: EventId,
        quantity: u32,
    ) -> DomainResult<Booking> {
        self.simulate_latency().await;

        if quantity == 0 {
            return Err(DomainError::validation("ticket quantity must be positive"));
        }

        // Check-and-decrement happens under the event store's write lock;
        // nothing between it and the append can observe partial state.
        let event = self.events.reserve_tickets(event_id, quantity)?;
        let booking = Booking::confirmed(user_id, &event, quantity);
        self.bookings.insert(booking.clone());

        tracing::info!(
            booking_id = %booking.id,
            event_id = %event_id,
            quantity,
            total_price = booking.total_price,
            "booking confirmed"
        );
        Ok(booking)
    }

    /// Cancel a confirmed booking and restore its tickets to the event.
    pub async fn cancel(&self, booking_id: BookingId) -> DomainResult<Booking> {
        self.simulate_latency().await;

        let booking = self.bookings.mark_cancelled(booking_id)?;

        if !self
            .events
            .release_tickets(booking.event_id, booking.ticket_quantity)
        {
            // The event vanished under the booking; the cancellation itself
            // still stands, there is just no inventory to restore.
            tracing::warn!(
                booking_id = %booking.id,
                event_id = %booking.event_id,
                "cancelled booking references a missing event; skipping ticket restoration"
            );
        }

        tracing::info!(booking_id = %booking.id, "booking cancelled");
        Ok(booking)
    }

    /// All of a user's bookings, each paired with its event.
    ///
    /// A booking whose event no longer exists is dropped from the result
    /// rather than surfaced as a broken pair.
    pub async fn list_user_bookings(&self, user_id: UserId) -> Vec<BookedEvent> {
        self.simulate_latency().await;

        self.bookings
            .list_by_user(user_id)
            .into_iter()
            .filter_map(|booking| match self.events.get(booking.event_id) {
                Some(event) => Some(BookedEvent { booking, event }),
                None => {
                    tracing::warn!(
                        booking_id = %booking.id,
                        event_id = %booking.event_id,
                        "booking references a missing event; omitting from results"
                    );
                    None
                }
            })
            .collect()
    }
}
