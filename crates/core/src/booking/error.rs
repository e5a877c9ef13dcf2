use thiserror::Error;

use crate::storage::RepositoryError;

/// Errors surfaced by booking operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Booking not found: {0}")]
    NotFound(String),
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Result type for booking operations.
pub type Result<T> = std::result::Result<T, BookingError>;

impl From<RepositoryError> for BookingError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { id, .. } => BookingError::NotFound(id),
            other => BookingError::StoreUnavailable(other.to_string()),
        }
    }
}
