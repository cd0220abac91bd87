use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stagepass_core::{DomainError, EventId, UserId};

/// A bookable occasion with a fixed inventory of tickets.
///
/// `price` is immutable after creation (no update operation exists), and
/// `available_tickets` is mutated only by the booking service when tickets
/// are reserved or released.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    /// Ticket price in whole currency units (e.g. 89.99).
    pub price: f64,
    pub available_tickets: u32,
    pub image_url: String,
    /// Open enumeration ("concerts", "workshops", ...), not a closed enum.
    pub category: String,
    pub organizer_id: UserId,
    pub organizer_name: String,
}

/// Caller-supplied data for a new event; the id is assigned on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub price: f64,
    pub available_tickets: u32,
    #[serde(default)]
    pub image_url: String,
    pub category: String,
    pub organizer_id: UserId,
    pub organizer_name: String,
}

impl EventDraft {
    /// Validate required fields and numeric ranges.
    ///
    /// Validation lives here rather than in the caller so the invariants hold
    /// no matter which surface created the event.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.title.trim().is_empty() {
            return Err(DomainError::validation("title cannot be empty"));
        }
        if self.description.trim().is_empty() {
            return Err(DomainError::validation("description cannot be empty"));
        }
        if self.location.trim().is_empty() {
            return Err(DomainError::validation("location cannot be empty"));
        }
        if self.category.trim().is_empty() {
            return Err(DomainError::validation("category cannot be empty"));
        }
        if self.organizer_name.trim().is_empty() {
            return Err(DomainError::validation("organizer_name cannot be empty"));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(DomainError::validation("price must be a non-negative number"));
        }
        Ok(())
    }

    /// Turn a validated draft into a stored event with a fresh id.
    pub fn into_event(self) -> Result<Event, DomainError> {
        self.validate()?;
        Ok(Event {
            id: EventId::new(),
            title: self.title,
            description: self.description,
            date: self.date,
            location: self.location,
            price: self.price,
            available_tickets: self.available_tickets,
            image_url: self.image_url,
            category: self.category,
            organizer_id: self.organizer_id,
            organizer_name: self.organizer_name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> EventDraft {
        EventDraft {
            title: "Tech Conference 2025".to_string(),
            description: "Two days of talks and workshops.".to_string(),
            date: Utc::now(),
            location: "Convention Center, San Francisco".to_string(),
            price: 299.99,
            available_tickets: 200,
            image_url: String::new(),
            category: "conferences".to_string(),
            organizer_id: UserId::new(),
            organizer_name: "Event Manager".to_string(),
        }
    }

    #[test]
    fn valid_draft_becomes_event_with_fresh_id() {
        let d = draft();
        let event = d.clone().into_event().unwrap();
        assert_eq!(event.title, d.title);
        assert_eq!(event.available_tickets, 200);

        let other = d.into_event().unwrap();
        assert_ne!(event.id, other.id);
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut d = draft();
        d.title = "   ".to_string();
        let err = d.into_event().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn negative_price_is_rejected() {
        let mut d = draft();
        d.price = -1.0;
        assert!(matches!(d.validate(), Err(DomainError::Validation(_))));
    }

    #[test]
    fn non_finite_price_is_rejected() {
        let mut d = draft();
        d.price = f64::NAN;
        assert!(d.validate().is_err());
        d.price = f64::INFINITY;
        assert!(d.validate().is_err());
    }

    #[test]
    fn free_event_with_zero_tickets_is_allowed() {
        let mut d = draft();
        d.price = 0.0;
        d.available_tickets = 0;
        assert!(d.validate().is_ok());
    }
}
