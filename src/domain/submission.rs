use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// The submission channels accepted by the relay endpoints.
///
/// The kind decides which fields are required, which message template is
/// rendered, and how the entry is labelled in the ledger.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SubmissionKind {
    Contact,
    Calculator,
    Newsletter,
    PriceQuote,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown submission kind")]
pub struct UnknownSubmissionKind;

impl SubmissionKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            SubmissionKind::Contact => "contact",
            SubmissionKind::Calculator => "calculator",
            SubmissionKind::Newsletter => "newsletter",
            SubmissionKind::PriceQuote => "price-quote",
        }
    }
}

impl Display for SubmissionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SubmissionKind {
    type Err = UnknownSubmissionKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contact" => Ok(SubmissionKind::Contact),
            "calculator" => Ok(SubmissionKind::Calculator),
            "newsletter" => Ok(SubmissionKind::Newsletter),
            "price-quote" => Ok(SubmissionKind::PriceQuote),
            _ => Err(UnknownSubmissionKind),
        }
    }
}

/// The normalized, language- and transport-independent form of one submission.
///
/// Every field is optional here: the normalizer collects whatever the payload
/// carries for the kind at hand and leaves the rest unset. Required-field
/// policy is applied later, per kind, by the relay service.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalSubmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_requested: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_count: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub design_preferences: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub integrations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_band: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_notes: Option<String>,
}

/// One recorded submission attempt, as stored in the ledger.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct LedgerEntry {
    pub id: Uuid,
    pub kind: SubmissionKind,
    pub data: CanonicalSubmission,
    pub created_at: NaiveDateTime,
}

/// A submission about to be recorded. Id and timestamp are generated by the
/// ledger at record time.
#[derive(Clone, Debug)]
pub struct NewLedgerEntry {
    pub kind: SubmissionKind,
    pub data: CanonicalSubmission,
}
