use axum::{Router, routing::get};

pub mod auth;
pub mod bookings;
pub mod events;
pub mod system;

/// Router for all service endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/events", events::router())
        .nest("/bookings", bookings::router())
        .route("/users/:id/bookings", get(bookings::list_user_bookings))
        .route("/organizers/:id/events", get(events::list_organizer_events))
}
