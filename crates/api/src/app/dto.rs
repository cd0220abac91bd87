use chrono::{DateTime, Utc};
use serde::Deserialize;

use stagepass_auth::Account;
use stagepass_booking::Booking;
use stagepass_catalog::{Event, EventDraft, EventFilter};
use stagepass_core::UserId;
use stagepass_service::BookedEvent;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
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

impl From<CreateEventRequest> for EventDraft {
    fn from(req: CreateEventRequest) -> Self {
        EventDraft {
            title: req.title,
            description: req.description,
            date: req.date,
            location: req.location,
            price: req.price,
            available_tickets: req.available_tickets,
            image_url: req.image_url,
            category: req.category,
            organizer_id: req.organizer_id,
            organizer_name: req.organizer_name,
        }
    }
}

/// Query parameters for `GET /events`.
#[derive(Debug, Default, Deserialize)]
pub struct EventsQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl From<EventsQuery> for EventFilter {
    fn from(q: EventsQuery) -> Self {
        EventFilter {
            search: q.search,
            category: q.category,
            from_date: q.from,
            to_date: q.to,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct BookRequest {
    pub user_id: UserId,
    pub event_id: stagepass_core::EventId,
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: stagepass_auth::Role,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

// -------------------------
// JSON mapping helpers
// -------------------------

pub fn event_to_json(event: &Event) -> serde_json::Value {
    serde_json::json!({
        "id": event.id.to_string(),
        "title": event.title,
        "description": event.description,
        "date": event.date,
        "location": event.location,
        "price": event.price,
        "available_tickets": event.available_tickets,
        "image_url": event.image_url,
        "category": event.category,
        "organizer_id": event.organizer_id.to_string(),
        "organizer_name": event.organizer_name,
    })
}

pub fn booking_to_json(booking: &Booking) -> serde_json::Value {
    serde_json::json!({
        "id": booking.id.to_string(),
        "user_id": booking.user_id.to_string(),
        "event_id": booking.event_id.to_string(),
        "ticket_quantity": booking.ticket_quantity,
        "total_price": booking.total_price,
        "status": booking.status,
        "booking_date": booking.booking_date,
    })
}

pub fn booked_event_to_json(pair: &BookedEvent) -> serde_json::Value {
    serde_json::json!({
        "booking": booking_to_json(&pair.booking),
        "event": event_to_json(&pair.event),
    })
}

pub fn account_to_json(account: &Account) -> serde_json::Value {
    serde_json::json!({
        "id": account.id.to_string(),
        "name": account.name,
        "email": account.email,
        "role": account.role,
    })
}
