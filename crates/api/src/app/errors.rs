use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use stagepass_auth::AuthError;
use stagepass_core::DomainError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "not found"),
        DomainError::InsufficientInventory { requested, available } => json_error(
            StatusCode::CONFLICT,
            "insufficient_inventory",
            format!("requested {requested} tickets but only {available} available"),
        ),
        DomainError::AlreadyCancelled => json_error(
            StatusCode::CONFLICT,
            "already_cancelled",
            "booking already cancelled",
        ),
    }
}

pub fn auth_error_to_response(err: AuthError) -> axum::response::Response {
    match err {
        AuthError::DuplicateEmail => {
            json_error(StatusCode::CONFLICT, "duplicate_email", "email already in use")
        }
        AuthError::InvalidCredentials => json_error(
            StatusCode::UNAUTHORIZED,
            "invalid_credentials",
            "invalid email or password",
        ),
        AuthError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
