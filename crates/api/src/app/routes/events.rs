use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use stagepass_catalog::EventFilter;
use stagepass_core::{EventId, UserId};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_events).post(create_event))
        .route("/categories", get(list_categories))
        .route("/:id", get(get_event))
}

pub async fn list_events(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::EventsQuery>,
) -> axum::response::Response {
    let filter: EventFilter = query.into();
    let events = services.tickets.query_events(&filter).await;

    let body: Vec<serde_json::Value> = events.iter().map(dto::event_to_json).collect();
    (StatusCode::OK, Json(body)).into_response()
}

pub async fn get_event(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: EventId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid event id"),
    };

    match services.tickets.get_event(id).await {
        Some(event) => (StatusCode::OK, Json(dto::event_to_json(&event))).into_response(),
        None => errors::json_error(StatusCode::NOT_FOUND, "not_found", "event not found"),
    }
}

pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let categories = services.tickets.list_categories().await;
    (StatusCode::OK, Json(categories)).into_response()
}

pub async fn create_event(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CreateEventRequest>,
) -> axum::response::Response {
    match services.tickets.create_event(body.into()).await {
        Ok(event) => (StatusCode::CREATED, Json(dto::event_to_json(&event))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn list_organizer_events(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let organizer_id: UserId = match id.parse() {
        Ok(v) => v,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid organizer id");
        }
    };

    let events = services.tickets.list_organizer_events(organizer_id).await;
    let body: Vec<serde_json::Value> = events.iter().map(dto::event_to_json).collect();
    (StatusCode::OK, Json(body)).into_response()
}
