//! In-memory event and booking stores.
//!
//! Both stores keep records in insertion order behind an `RwLock`; every
//! read-modify-write that touches an invariant (ticket counts, booking
//! status) happens under a single write-lock acquisition so concurrent
//! callers cannot interleave between check and mutation.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use stagepass_booking::Booking;
use stagepass_catalog::{Event, EventFilter};
use stagepass_core::{BookingId, DomainError, DomainResult, EventId, UserId};

/// Ordered in-memory collection of events, the single source of truth for
/// catalog data.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    inner: RwLock<Vec<Event>>,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Event>> {
        // A poisoned lock means a writer panicked mid-call; the data itself
        // is still a consistent snapshot, so recover the guard.
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Event>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn insert(&self, event: Event) {
        self.write().push(event);
    }

    pub fn get(&self, id: EventId) -> Option<Event> {
        self.read().iter().find(|e| e.id == id).cloned()
    }

    /// All events in insertion order.
    pub fn list(&self) -> Vec<Event> {
        self.read().clone()
    }

    /// Events matching `filter`, insertion order preserved (no re-sort).
    pub fn query(&self, filter: &EventFilter) -> Vec<Event> {
        self.read()
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect()
    }

    pub fn list_by_organizer(&self, organizer_id: UserId) -> Vec<Event> {
        self.read()
            .iter()
            .filter(|e| e.organizer_id == organizer_id)
            .cloned()
            .collect()
    }

    /// Distinct category values, order of first appearance.
    pub fn categories(&self) -> Vec<String> {
        let guard = self.read();
        let mut seen: Vec<String> = Vec::new();
        for event in guard.iter() {
            if !seen.contains(&event.category) {
                seen.push(event.category.clone());
            }
        }
        seen
    }

    /// Atomically check availability and decrement the ticket count.
    ///
    /// Returns the event as it was *after* the reservation. On failure the
    /// count is untouched.
    pub fn reserve_tickets(&self, id: EventId, quantity: u32) -> DomainResult<Event> {
        let mut guard = self.write();
        let event = guard
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(DomainError::NotFound)?;

        if event.available_tickets < quantity {
            return Err(DomainError::InsufficientInventory {
                requested: quantity,
                available: event.available_tickets,
            });
        }

        event.available_tickets -= quantity;
        Ok(event.clone())
    }

    /// Return `quantity` tickets to the pool. Returns false when the event
    /// no longer exists (the caller decides whether that is worth a warning).
    pub fn release_tickets(&self, id: EventId, quantity: u32) -> bool {
        let mut guard = self.write();
        match guard.iter_mut().find(|e| e.id == id) {
            Some(event) => {
                event.available_tickets = event.available_tickets.saturating_add(quantity);
                true
            }
            None => false,
        }
    }
}

/// Ordered in-memory collection of bookings, append-only except for the
/// status transition.
#[derive(Debug, Default)]
pub struct InMemoryBookingStore {
    inner: RwLock<Vec<Booking>>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<Booking>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Booking>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn insert(&self, booking: Booking) {
        self.write().push(booking);
    }

    pub fn get(&self, id: BookingId) -> Option<Booking> {
        self.read().iter().find(|b| b.id == id).cloned()
    }

    pub fn list_by_user(&self, user_id: UserId) -> Vec<Booking> {
        self.read()
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Flip a booking to cancelled, exactly once, under the write lock.
    ///
    /// Returns the updated booking so the caller can restore inventory from
    /// its `ticket_quantity` without re-reading the store.
    pub fn mark_cancelled(&self, id: BookingId) -> DomainResult<Booking> {
        let mut guard = self.write();
        let booking = guard
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(DomainError::NotFound)?;

        booking.cancel()?;
        Ok(booking.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn event(tickets: u32, category: &str) -> Event {
        Event {
            id: EventId::new(),
            title: "Photography Workshop".to_string(),
            description: "Hands-on camera basics.".to_string(),
            date: Utc::now(),
            location: "Photography Studio, Chicago".to_string(),
            price: 149.99,
            available_tickets: tickets,
            image_url: String::new(),
            category: category.to_string(),
            organizer_id: UserId::new(),
            organizer_name: "Event Manager".to_string(),
        }
    }

    #[test]
    fn reserve_fails_without_touching_inventory() {
        let store = InMemoryEventStore::new();
        let e = event(30, "workshops");
        let id = e.id;
        store.insert(e);

        let err = store.reserve_tickets(id, 31).unwrap_err();
        assert_eq!(
            err,
            DomainError::InsufficientInventory {
                requested: 31,
                available: 30
            }
        );
        assert_eq!(store.get(id).unwrap().available_tickets, 30);
    }

    #[test]
    fn reserve_then_release_round_trips() {
        let store = InMemoryEventStore::new();
        let e = event(500, "concerts");
        let id = e.id;
        store.insert(e);

        let after = store.reserve_tickets(id, 2).unwrap();
        assert_eq!(after.available_tickets, 498);

        assert!(store.release_tickets(id, 2));
        assert_eq!(store.get(id).unwrap().available_tickets, 500);
    }

    #[test]
    fn release_on_missing_event_reports_false() {
        let store = InMemoryEventStore::new();
        assert!(!store.release_tickets(EventId::new(), 5));
    }

    #[test]
    fn categories_dedupe_in_first_appearance_order() {
        let store = InMemoryEventStore::new();
        store.insert(event(10, "concerts"));
        store.insert(event(10, "workshops"));
        store.insert(event(10, "concerts"));
        store.insert(event(10, "sports"));

        assert_eq!(store.categories(), vec!["concerts", "workshops", "sports"]);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = InMemoryEventStore::new();
        let first = event(1, "arts");
        let second = event(2, "sports");
        let (a, b) = (first.id, second.id);
        store.insert(first);
        store.insert(second);

        let ids: Vec<EventId> = store.list().into_iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![a, b]);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Reserve(u32),
            Release(u32),
        }

        fn op_strategy() -> impl Strategy<Value = Op> {
            prop_oneof![
                (1u32..200).prop_map(Op::Reserve),
                (1u32..200).prop_map(Op::Release),
            ]
        }

        proptest! {
            /// Property: under any sequence of reservations and releases the
            /// ticket count never goes negative, and successful reservations
            /// minus releases always reconcile with the stored count.
            #[test]
            fn inventory_is_conserved(ops in proptest::collection::vec(op_strategy(), 1..64)) {
                let store = InMemoryEventStore::new();
                let e = event(500, "concerts");
                let id = e.id;
                store.insert(e);

                let mut expected: i64 = 500;
                for op in ops {
                    match op {
                        Op::Reserve(n) => {
                            match store.reserve_tickets(id, n) {
                                Ok(after) => {
                                    expected -= i64::from(n);
                                    prop_assert_eq!(i64::from(after.available_tickets), expected);
                                }
                                Err(DomainError::InsufficientInventory { requested, available }) => {
                                    prop_assert_eq!(i64::from(requested), i64::from(n));
                                    prop_assert_eq!(i64::from(available), expected);
                                }
                                Err(other) => prop_assert!(false, "unexpected error: {other:?}"),
                            }
                        }
                        Op::Release(n) => {
                            prop_assert!(store.release_tickets(id, n));
                            expected += i64::from(n);
                        }
                    }
                    prop_assert!(expected >= 0);
                    prop_assert_eq!(i64::from(store.get(id).unwrap().available_tickets), expected);
                }
            }
        }
    }
}
