//! HTTP application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: config + store/service wiring and demo seeding
//! - `routes/`: HTTP routes + handlers (one file per domain area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub async fn build_app(config: services::ServiceConfig) -> Router {
    let app_services = Arc::new(services::build_services(config).await);

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(routes::router().layer(Extension(app_services)))
        .layer(ServiceBuilder::new())
}
