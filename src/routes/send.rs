use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Responder, post, web};

use crate::domain::submission::SubmissionKind;
use crate::dto::submission::SuccessResponse;
use crate::forms::submission::{KIND_KEYS, canonicalize, parse_payload};
use crate::models::config::ServerConfig;
use crate::notifier::Notifier;
use crate::repository::submission::DieselLedgerRepository;
use crate::routes::error_response;
use crate::services::ServiceError;
use crate::services::submission::relay_submission;

/// Generic relay for the embedded site widgets. The payload carries a `type`
/// discriminator; the full price-quote wizard has its own endpoint.
#[post("/send-email")]
pub async fn send_relay(
    req: HttpRequest,
    body: web::Bytes,
    repo: web::Data<DieselLedgerRepository>,
    notifier: web::Data<Arc<dyn Notifier>>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let raw = match parse_payload(req.headers(), body).await {
        Ok(raw) => raw,
        Err(err) => return error_response(&err.into()),
    };

    let kind = match raw
        .text(KIND_KEYS)
        .and_then(|value| value.parse::<SubmissionKind>().ok())
    {
        Some(kind) if kind != SubmissionKind::PriceQuote => kind,
        _ => return error_response(&ServiceError::InvalidKind),
    };
    let submission = canonicalize(kind, &raw);

    match relay_submission(
        repo.get_ref(),
        &**notifier.get_ref(),
        &server_config,
        kind,
        submission,
    )
    .await
    {
        Ok(()) => HttpResponse::Ok().json(SuccessResponse::ok()),
        Err(err) => error_response(&err),
    }
}
