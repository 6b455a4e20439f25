use crate::domain::submission::{CanonicalSubmission, LedgerEntry, NewLedgerEntry, SubmissionKind};
use crate::models::config::ServerConfig;
use crate::notifier::Notifier;
use crate::repository::{LedgerListQuery, LedgerReader, LedgerWriter};
use crate::services::{ServiceError, ServiceResult, notification};

/// Validates a submission for its kind, renders the notification, attempts
/// delivery exactly once, and records the attempt in the ledger.
///
/// The ledger write happens once the delivery attempt has resolved, whatever
/// its outcome; a failed write is logged and dropped so it never changes the
/// HTTP result. A failed delivery is reported to the caller but not retried.
pub async fn relay_submission<R, N>(
    repo: &R,
    notifier: &N,
    config: &ServerConfig,
    kind: SubmissionKind,
    submission: CanonicalSubmission,
) -> ServiceResult<()>
where
    R: LedgerWriter + ?Sized,
    N: Notifier + ?Sized,
{
    let missing = missing_required_fields(kind, &submission);
    if !missing.is_empty() {
        return Err(ServiceError::Validation(missing));
    }

    let message = notification::render(kind, &submission, &config.contact_email);
    let delivery = notifier.send(&message).await;

    let entry = NewLedgerEntry {
        kind,
        data: submission,
    };
    if let Err(err) = repo.record(&entry) {
        log::error!("Failed to record {kind} submission in ledger: {err}");
    }

    delivery.map_err(|err| {
        log::error!("Failed to deliver {kind} notification: {err}");
        ServiceError::Delivery(err.to_string())
    })
}

/// Lists ledger entries for the admin view, newest last, optionally filtered
/// by kind. Requires the configured admin bearer token.
pub fn list_submissions<R>(
    repo: &R,
    config: &ServerConfig,
    token: Option<&str>,
    kind: Option<SubmissionKind>,
) -> ServiceResult<Vec<LedgerEntry>>
where
    R: LedgerReader + ?Sized,
{
    if token != Some(config.admin_token.as_str()) {
        return Err(ServiceError::Unauthorized);
    }

    let mut query = LedgerListQuery::new();
    if let Some(kind) = kind {
        query = query.kind(kind);
    }
    Ok(repo.list(query)?)
}

/// Required-field policy per submission kind. Missing fields are reported
/// under their canonical English names.
fn missing_required_fields(
    kind: SubmissionKind,
    submission: &CanonicalSubmission,
) -> Vec<&'static str> {
    let required: &[(&'static str, &Option<String>)] = match kind {
        SubmissionKind::Contact => &[
            ("name", &submission.name),
            ("email", &submission.email),
            ("message", &submission.message),
        ],
        SubmissionKind::Calculator | SubmissionKind::Newsletter => {
            &[("name", &submission.name), ("email", &submission.email)]
        }
        SubmissionKind::PriceQuote => &[
            ("name", &submission.name),
            ("company", &submission.company),
            ("email", &submission.email),
            ("phone", &submission.phone),
        ],
    };

    required
        .iter()
        .filter_map(|(field, value)| value.is_none().then_some(*field))
        .collect()
}
