//! HTTP handlers for the relay endpoints and the admin submissions API.

use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse};

use crate::dto::submission::ErrorResponse;
use crate::services::ServiceError;

pub mod admin;
pub mod contact;
pub mod quote;
pub mod send;

/// Maps a service error to its structured JSON response. Provider error text
/// goes into `details` for operators; the `error` message stays generic.
pub fn error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::MalformedPayload => {
            HttpResponse::BadRequest().json(ErrorResponse::new("Invalid request format"))
        }
        ServiceError::Validation(missing) => HttpResponse::BadRequest().json(ErrorResponse::new(
            format!("Missing required fields: {}", missing.join(", ")),
        )),
        ServiceError::InvalidKind => {
            HttpResponse::BadRequest().json(ErrorResponse::new("Invalid submission type"))
        }
        ServiceError::Unauthorized => {
            HttpResponse::Unauthorized().json(ErrorResponse::new("Unauthorized"))
        }
        ServiceError::Delivery(details) => HttpResponse::InternalServerError().json(
            ErrorResponse::with_details("Failed to send message", details.clone()),
        ),
        ServiceError::Repository(_) => {
            HttpResponse::InternalServerError().json(ErrorResponse::new("Internal server error"))
        }
    }
}

/// Extracts the bearer token from the Authorization header, if any.
pub fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
