//! Custom error types for the service directory
//!
//! Provides structured error handling with context for store and persistence failures.

use std::fmt;

/// Error type for service and API key store operations
#[derive(Debug)]
pub enum StoreError {
    /// Record with the given id does not exist
    NotFound { id: String },

    /// Backing store read or write failed
    Persistence(PersistenceError),
}

/// Persistence error variants
#[derive(Debug)]
pub enum PersistenceError {
    /// Reading from the backing store failed
    ReadFailed { reason: String },

    /// Writing to the backing store failed
    WriteFailed { reason: String },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound { id } => {
                write!(f, "Record '{}' not found", id)
            }
            StoreError::Persistence(e) => write!(f, "Persistence error: {}", e),
        }
    }
}

impl fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistenceError::ReadFailed { reason } => {
                write!(f, "Failed to read from backing store: {}", reason)
            }
            PersistenceError::WriteFailed { reason } => {
                write!(f, "Failed to write to backing store: {}", reason)
            }
        }
    }
}

impl std::error::Error for StoreError {}
impl std::error::Error for PersistenceError {}

impl From<PersistenceError> for StoreError {
    fn from(err: PersistenceError) -> Self {
        StoreError::Persistence(err)
    }
}

impl StoreError {
    /// True when the error should map to a missing-record response
    /// rather than a backing store failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    pub fn read_failed(err: anyhow::Error) -> Self {
        StoreError::Persistence(PersistenceError::ReadFailed {
            reason: err.to_string(),
        })
    }

    pub fn write_failed(err: anyhow::Error) -> Self {
        StoreError::Persistence(PersistenceError::WriteFailed {
            reason: err.to_string(),
        })
    }
}
