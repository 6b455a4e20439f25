use serde::Serialize;

use crate::domain::submission::{CanonicalSubmission, LedgerEntry, SubmissionKind};

#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Structured error payload. `details` carries diagnostic text for operators
/// and is omitted when there is nothing beyond the generic message.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// One ledger entry as listed by the admin API.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionDto {
    pub id: String,
    pub kind: SubmissionKind,
    pub data: CanonicalSubmission,
    pub created_at: String,
}

impl From<LedgerEntry> for SubmissionDto {
    fn from(entry: LedgerEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            kind: entry.kind,
            data: entry.data,
            created_at: entry.created_at.and_utc().to_rfc3339(),
        }
    }
}
