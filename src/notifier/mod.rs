//! Outbound email notification.
//!
//! Delivery is abstracted behind the [`Notifier`] trait so the relay services
//! stay independent of the transport. The production implementation is
//! [`smtp::SmtpNotifier`]; tests substitute a recording stub.

use async_trait::async_trait;
use thiserror::Error;

pub mod smtp;

pub use smtp::SmtpNotifier;

/// A fully-formed notification message. Sender and recipient addresses are
/// configuration-derived, never request-supplied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
}

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("failed to build message: {0}")]
    Message(String),

    #[error("transport error: {0}")]
    Transport(String),
}

/// Attempts delivery of one notification message. Fire-and-forget-once: a
/// failed attempt is reported to the caller, never retried or queued.
#[cfg_attr(feature = "test-mocks", mockall::automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifierError>;
}
