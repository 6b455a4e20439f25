use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Responder, post, web};

use crate::domain::submission::SubmissionKind;
use crate::dto::submission::SuccessResponse;
use crate::forms::submission::{canonicalize, parse_payload};
use crate::models::config::ServerConfig;
use crate::notifier::Notifier;
use crate::repository::submission::DieselLedgerRepository;
use crate::routes::error_response;
use crate::services::submission::relay_submission;

/// Contact form relay. Accepts the English-named JSON widget, the
/// Norwegian-named business form, and plain HTML form posts.
#[post("/contact")]
pub async fn contact_relay(
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
    let submission = canonicalize(SubmissionKind::Contact, &raw);

    match relay_submission(
        repo.get_ref(),
        &**notifier.get_ref(),
        &server_config,
        SubmissionKind::Contact,
        submission,
    )
    .await
    {
        Ok(()) => HttpResponse::Ok().json(SuccessResponse::ok()),
        Err(err) => error_response(&err),
    }
}
