use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::submission::{LedgerEntry, NewLedgerEntry, SubmissionKind};
use crate::repository::errors::RepositoryError;

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::submissions)]
/// Diesel model for [`crate::domain::submission::LedgerEntry`].
pub struct SubmissionRow {
    pub id: String,
    pub kind: String,
    pub data: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::submissions)]
/// Insertable form of [`SubmissionRow`].
pub struct NewSubmissionRow {
    pub id: String,
    pub kind: String,
    pub data: String,
    pub created_at: NaiveDateTime,
}

impl NewSubmissionRow {
    /// Materializes a ledger entry for insertion, stamping id and timestamp.
    pub fn from_entry(entry: &NewLedgerEntry) -> Result<Self, RepositoryError> {
        let data = serde_json::to_string(&entry.data)
            .map_err(|e| RepositoryError::ValidationError(format!("Serialization error: {e}")))?;
        Ok(Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind: entry.kind.as_str().to_string(),
            data,
            created_at: chrono::Utc::now().naive_utc(),
        })
    }
}

impl TryFrom<SubmissionRow> for LedgerEntry {
    type Error = RepositoryError;

    fn try_from(row: SubmissionRow) -> Result<Self, Self::Error> {
        let id = row
            .id
            .parse()
            .map_err(|_| RepositoryError::ValidationError(format!("Invalid id: {}", row.id)))?;
        let kind: SubmissionKind = row
            .kind
            .parse()
            .map_err(|_| RepositoryError::ValidationError(format!("Invalid kind: {}", row.kind)))?;
        let data = serde_json::from_str(&row.data).map_err(|e| {
            RepositoryError::ValidationError(format!("Deserialization error: {e}"))
        })?;

        Ok(LedgerEntry {
            id,
            kind,
            data,
            created_at: row.created_at,
        })
    }
}
