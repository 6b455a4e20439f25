//! Service layer: validation, rendering, and orchestration behind the routes.

use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod notification;
pub mod submission;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request body could not be parsed under any supported format.
    #[error("invalid request format")]
    MalformedPayload,

    /// Required fields for the submission kind are missing.
    #[error("missing required fields: {}", .0.join(", "))]
    Validation(Vec<&'static str>),

    /// The generic send endpoint received an unknown or unsupported kind.
    #[error("invalid submission type")]
    InvalidKind,

    #[error("unauthorized")]
    Unauthorized,

    /// The notifier attempt failed; the payload is diagnostic detail.
    #[error("failed to send notification: {0}")]
    Delivery(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::MalformedPayload => ServiceError::MalformedPayload,
        }
    }
}
