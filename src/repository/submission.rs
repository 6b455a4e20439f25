use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::submission::{LedgerEntry, NewLedgerEntry};
use crate::repository::errors::RepositoryResult;
use crate::repository::{LedgerListQuery, LedgerReader, LedgerWriter};

/// Diesel implementation of the submission ledger.
#[derive(Clone)]
pub struct DieselLedgerRepository {
    pool: DbPool,
}

impl DieselLedgerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl LedgerWriter for DieselLedgerRepository {
    fn record(&self, entry: &NewLedgerEntry) -> RepositoryResult<LedgerEntry> {
        use crate::models::submission::{NewSubmissionRow, SubmissionRow};
        use crate::schema::submissions;

        let mut conn = self.pool.get()?;
        let row = NewSubmissionRow::from_entry(entry)?;
        let stored = diesel::insert_into(submissions::table)
            .values(&row)
            .get_result::<SubmissionRow>(&mut conn)?;

        stored.try_into()
    }
}

impl LedgerReader for DieselLedgerRepository {
    fn list(&self, query: LedgerListQuery) -> RepositoryResult<Vec<LedgerEntry>> {
        use crate::models::submission::SubmissionRow;
        use crate::schema::submissions;

        let mut conn = self.pool.get()?;
        let mut statement = submissions::table.into_boxed();
        if let Some(kind) = query.kind {
            statement = statement.filter(submissions::kind.eq(kind.as_str()));
        }

        let rows = statement
            .order(submissions::created_at.asc())
            .load::<SubmissionRow>(&mut conn)?;

        // Corrupt rows are skipped rather than failing the whole listing.
        Ok(rows
            .into_iter()
            .filter_map(|row| match LedgerEntry::try_from(row) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    log::warn!("Skipping undecodable ledger entry: {err}");
                    None
                }
            })
            .collect())
    }
}
