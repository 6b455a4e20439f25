//! Append-only submission ledger.
//!
//! The ledger records every attempted submission and is read back by the
//! admin API. Access goes through the [`LedgerReader`]/[`LedgerWriter`] traits
//! so the backing store can be swapped without touching call sites.

use crate::domain::submission::{LedgerEntry, NewLedgerEntry, SubmissionKind};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod submission;

#[derive(Debug, Clone, Default)]
pub struct LedgerListQuery {
    pub kind: Option<SubmissionKind>,
}

impl LedgerListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn kind(mut self, kind: SubmissionKind) -> Self {
        self.kind = Some(kind);
        self
    }
}

#[cfg_attr(feature = "test-mocks", mockall::automock)]
pub trait LedgerReader {
    /// Returns entries in insertion order, oldest first. Undecodable rows are
    /// skipped; an empty or missing store yields an empty list, not an error.
    fn list(&self, query: LedgerListQuery) -> RepositoryResult<Vec<LedgerEntry>>;
}

#[cfg_attr(feature = "test-mocks", mockall::automock)]
pub trait LedgerWriter {
    /// Appends a submission, generating a fresh id and timestamp, and returns
    /// the stored entry. Previously stored entries are never touched.
    fn record(&self, entry: &NewLedgerEntry) -> RepositoryResult<LedgerEntry>;
}
