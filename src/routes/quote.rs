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

/// Price-quote wizard relay.
#[post("/price-quote")]
pub async fn price_quote_relay(
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
    let submission = canonicalize(SubmissionKind::PriceQuote, &raw);

    match relay_submission(
        repo.get_ref(),
        &**notifier.get_ref(),
        &server_config,
        SubmissionKind::PriceQuote,
        submission,
    )
    .await
    {
        Ok(()) => HttpResponse::Ok().json(SuccessResponse::ok()),
        Err(err) => error_response(&err),
    }
}
