//! Inbound payload handling for the relay endpoints.

use thiserror::Error;

pub mod submission;

#[derive(Debug, Error)]
/// Errors that can occur while reading a submission payload.
pub enum FormError {
    /// The request body could not be parsed under any supported format.
    #[error("invalid request format")]
    MalformedPayload,
}
