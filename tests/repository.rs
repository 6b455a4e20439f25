use diesel::prelude::*;
use skjemapost::domain::submission::{CanonicalSubmission, NewLedgerEntry, SubmissionKind};
use skjemapost::models::submission::NewSubmissionRow;
use skjemapost::repository::submission::DieselLedgerRepository;
use skjemapost::repository::{LedgerListQuery, LedgerReader, LedgerWriter};

mod common;

fn contact_entry(name: &str) -> NewLedgerEntry {
    NewLedgerEntry {
        kind: SubmissionKind::Contact,
        data: CanonicalSubmission {
            name: Some(name.to_string()),
            email: Some(format!("{}@example.no", name.to_lowercase())),
            message: Some("Hei".to_string()),
            ..CanonicalSubmission::default()
        },
    }
}

#[test]
fn test_record_appends_and_returns_the_entry() {
    let test_db = common::TestDb::new("test_record_appends.db");
    let repo = DieselLedgerRepository::new(test_db.pool().clone());

    let before = repo.list(LedgerListQuery::new()).unwrap();
    assert!(before.is_empty());

    let recorded = repo.record(&contact_entry("Ola")).unwrap();
    assert_eq!(recorded.kind, SubmissionKind::Contact);
    assert_eq!(recorded.data.name.as_deref(), Some("Ola"));

    let after = repo.list(LedgerListQuery::new()).unwrap();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after.last(), Some(&recorded));
}

#[test]
fn test_list_preserves_insertion_order() {
    let test_db = common::TestDb::new("test_insertion_order.db");
    let repo = DieselLedgerRepository::new(test_db.pool().clone());

    let first = repo.record(&contact_entry("Anne")).unwrap();
    let second = repo.record(&contact_entry("Bjorn")).unwrap();
    let third = repo.record(&contact_entry("Cecilie")).unwrap();
    assert_ne!(first.id, second.id);
    assert_ne!(second.id, third.id);

    let entries = repo.list(LedgerListQuery::new()).unwrap();
    let names: Vec<_> = entries
        .iter()
        .map(|entry| entry.data.name.clone().unwrap())
        .collect();
    assert_eq!(names, vec!["Anne", "Bjorn", "Cecilie"]);
}

#[test]
fn test_list_filters_by_kind() {
    let test_db = common::TestDb::new("test_kind_filter.db");
    let repo = DieselLedgerRepository::new(test_db.pool().clone());

    repo.record(&contact_entry("Ola")).unwrap();
    repo.record(&NewLedgerEntry {
        kind: SubmissionKind::Newsletter,
        data: CanonicalSubmission {
            name: Some("Kari".to_string()),
            email: Some("kari@example.no".to_string()),
            ..CanonicalSubmission::default()
        },
    })
    .unwrap();
    repo.record(&contact_entry("Per")).unwrap();

    let contacts = repo
        .list(LedgerListQuery::new().kind(SubmissionKind::Contact))
        .unwrap();
    assert_eq!(contacts.len(), 2);
    assert!(
        contacts
            .iter()
            .all(|entry| entry.kind == SubmissionKind::Contact)
    );

    let quotes = repo
        .list(LedgerListQuery::new().kind(SubmissionKind::PriceQuote))
        .unwrap();
    assert!(quotes.is_empty());
}

#[test]
fn test_list_skips_undecodable_rows() {
    use skjemapost::schema::submissions;

    let test_db = common::TestDb::new("test_corrupt_rows.db");
    let repo = DieselLedgerRepository::new(test_db.pool().clone());

    repo.record(&contact_entry("Ola")).unwrap();

    let mut conn = test_db.pool().get().unwrap();
    let corrupt = vec![
        NewSubmissionRow {
            id: "e6f4f9a0-0000-0000-0000-000000000001".to_string(),
            kind: "contact".to_string(),
            data: "not json at all".to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        },
        NewSubmissionRow {
            id: "e6f4f9a0-0000-0000-0000-000000000002".to_string(),
            kind: "mystery".to_string(),
            data: "{}".to_string(),
            created_at: chrono::Utc::now().naive_utc(),
        },
    ];
    diesel::insert_into(submissions::table)
        .values(&corrupt)
        .execute(&mut conn)
        .unwrap();

    let entries = repo.list(LedgerListQuery::new()).unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].data.name.as_deref(), Some("Ola"));
}
