use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use serde::Deserialize;

use crate::domain::submission::SubmissionKind;
use crate::dto::submission::{ErrorResponse, SubmissionDto};
use crate::models::config::ServerConfig;
use crate::repository::submission::DieselLedgerRepository;
use crate::routes::{bearer_token, error_response};
use crate::services::submission::list_submissions;

#[derive(Deserialize)]
struct SubmissionsQueryParams {
    kind: Option<String>,
}

/// Admin listing of recorded submissions, oldest first. `kind` filters by
/// submission kind; `all` or no filter returns everything.
#[get("/v1/submissions")]
pub async fn api_v1_submissions(
    req: HttpRequest,
    params: web::Query<SubmissionsQueryParams>,
    repo: web::Data<DieselLedgerRepository>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let kind = match params.kind.as_deref() {
        None | Some("all") => None,
        Some(value) => match value.parse::<SubmissionKind>() {
            Ok(kind) => Some(kind),
            Err(_) => {
                return HttpResponse::BadRequest()
                    .json(ErrorResponse::new("Unknown submission kind"));
            }
        },
    };

    match list_submissions(repo.get_ref(), &server_config, bearer_token(&req), kind) {
        Ok(entries) => HttpResponse::Ok().json(
            entries
                .into_iter()
                .map(SubmissionDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => error_response(&err),
    }
}
