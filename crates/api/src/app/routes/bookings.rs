use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};

use stagepass_core::{BookingId, UserId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_booking))
        .route("/:id/cancel", post(cancel_booking))
}

pub async fn create_booking(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::BookRequest>,
) -> axum::response::Response {
    match services
        .tickets
        .book(body.user_id, body.event_id, body.quantity)
        .await
    {
        Ok(booking) => (StatusCode::CREATED, Json(dto::booking_to_json(&booking))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn cancel_booking(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: BookingId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid booking id");
        }
    };

    match services.tickets.cancel(id).await {
        Ok(booking) => (StatusCode::OK, Json(dto::booking_to_json(&booking))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_user_bookings(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let user_id: UserId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid user id"),
    };

    let pairs = services.tickets.list_user_bookings(user_id).await;
    let body: Vec<serde_json::Value> = pairs.iter().map(dto::booked_event_to_json).collect();
    (StatusCode::OK, Json(body)).into_response()
}
