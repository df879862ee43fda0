//! Use case error type.

use thiserror::Error;

use crate::error::MoneyError;

/// Uniform failure returned by every use case.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct UseCaseError {
    message: String,
}

impl UseCaseError {
    /// Creates an error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// No bank has been set up yet.
    #[must_use]
    pub fn no_bank_defined() -> Self {
        Self::new("No bank defined")
    }

    /// Returns the diagnostic message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<MoneyError> for UseCaseError {
    fn from(err: MoneyError) -> Self {
        Self::new(err.message())
    }
}
