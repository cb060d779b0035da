// src/application/error.rs
use crate::application::ports::storage::StorageError;
use crate::domain::errors::DomainError;
use crate::domain::validation::ValidationErrors;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation error: {0}")]
    Validation(ValidationErrors),

    /// The request was rejected before any storage call was made.
    #[error("{0}")]
    InvalidRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Storage(String),
}

impl ApplicationError {
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Wraps a storage failure, keeping the underlying message visible.
    pub fn storage(context: &str, err: &StorageError) -> Self {
        Self::Storage(format!("{context}: {err}"))
    }

    /// Lifts validation failures out of a domain error so callers see a
    /// single `Validation` variant regardless of which layer rejected input.
    pub fn from_domain(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => Self::Validation(errors),
        }
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    pub const fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest(_))
    }
}
