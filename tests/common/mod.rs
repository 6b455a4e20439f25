#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use skjemapost::db::{DbPool, establish_connection_pool};
use skjemapost::models::config::ServerConfig;
use skjemapost::notifier::{EmailMessage, Notifier, NotifierError};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// A migrated SQLite database in a temporary directory, removed on drop.
pub struct TestDb {
    pool: DbPool,
    _dir: tempfile::TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("non-utf8 temp path"))
            .expect("failed to build pool");

        let mut conn = pool.get().expect("failed to get connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("failed to run migrations");
        drop(conn);

        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Notifier stub that records every message instead of delivering it.
#[derive(Default)]
pub struct RecordingNotifier {
    pub sent: Mutex<Vec<EmailMessage>>,
    fail: bool,
}

impl RecordingNotifier {
    /// A notifier whose every attempt fails after being recorded.
    pub fn failing() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_message(&self) -> Option<EmailMessage> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifierError> {
        self.sent.lock().unwrap().push(message.clone());
        if self.fail {
            Err(NotifierError::Transport("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

pub fn test_config() -> ServerConfig {
    ServerConfig {
        address: "127.0.0.1".to_string(),
        port: 8080,
        database_url: ":memory:".to_string(),
        admin_token: "hemmelig".to_string(),
        smtp_host: "smtp.example.no".to_string(),
        smtp_port: 465,
        smtp_username: "relay".to_string(),
        smtp_password: "passord".to_string(),
        smtp_from: "kontakt@example.no".to_string(),
        contact_email: "post@example.no".to_string(),
    }
}
