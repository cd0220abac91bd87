use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stagepass_catalog::Event;
use stagepass_core::{BookingId, DomainError, EventId, UserId};

/// Booking status lifecycle. The only transition is Confirmed → Cancelled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

/// A user's reservation of a quantity of tickets against one event.
///
/// `total_price` is captured at booking time and never recomputed, so a later
/// price change could not retroactively alter historical bookings.
/// `event_id` is a non-owning reference; the event carries no back-reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: BookingId,
    pub user_id: UserId,
    pub event_id: EventId,
    pub ticket_quantity: u32,
    pub total_price: f64,
    pub status: BookingStatus,
    pub booking_date: DateTime<Utc>,
}

impl Booking {
    /// Create a confirmed booking against `event`, freezing the total price.
    ///
    /// Callers must have already reserved `quantity` tickets on the event;
    /// this constructor does not touch inventory.
    pub fn confirmed(user_id: UserId, event: &Event, quantity: u32) -> Self {
        Self {
            id: BookingId::new(),
            user_id,
            event_id: event.id,
            ticket_quantity: quantity,
            total_price: event.price * f64::from(quantity),
            status: BookingStatus::Confirmed,
            booking_date: Utc::now(),
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.status == BookingStatus::Cancelled
    }

    /// Transition Confirmed → Cancelled, exactly once.
    pub fn cancel(&mut self) -> Result<(), DomainError> {
        if self.is_cancelled() {
            return Err(DomainError::AlreadyCancelled);
        }
        self.status = BookingStatus::Cancelled;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event(price: f64) -> Event {
        Event {
            id: EventId::new(),
            title: "Summer Music Festival".to_string(),
            description: "Three days of performances.".to_string(),
            date: Utc::now(),
            location: "Central Park, New York".to_string(),
            price,
            available_tickets: 500,
            image_url: String::new(),
            category: "concerts".to_string(),
            organizer_id: UserId::new(),
            organizer_name: "Event Manager".to_string(),
        }
    }

    #[test]
    fn total_price_is_price_times_quantity() {
        let event = sample_event(89.99);
        let booking = Booking::confirmed(UserId::new(), &event, 2);

        assert_eq!(booking.total_price, 179.98);
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.event_id, event.id);
        assert_eq!(booking.ticket_quantity, 2);
    }

    #[test]
    fn cancel_transitions_exactly_once() {
        let event = sample_event(45.0);
        let mut booking = Booking::confirmed(UserId::new(), &event, 1);

        booking.cancel().unwrap();
        assert!(booking.is_cancelled());

        let err = booking.cancel().unwrap_err();
        assert_eq!(err, DomainError::AlreadyCancelled);
        assert!(booking.is_cancelled());
    }

    #[test]
    fn total_price_is_frozen_at_booking_time() {
        let mut event = sample_event(25.0);
        let booking = Booking::confirmed(UserId::new(), &event, 3);
        assert_eq!(booking.total_price, 75.0);

        // A later price change must not be reflected in the booking.
        event.price = 99.0;
        assert_eq!(booking.total_price, 75.0);
    }
}
