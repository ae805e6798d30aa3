//! Domain errors for customer operations
//!
//! These are domain-level errors that abstract away infrastructure details.
//! The persistence layer distinguishes only conflict and not-found from all
//! other storage failures; everything else is opaque.

use thiserror::Error;

/// Errors that can occur during customer operations
///
/// These errors represent business-level failures and are independent of
/// infrastructure implementation details (no sqlx error types here).
#[derive(Error, Debug)]
pub enum CustomerError {
    /// The requested customer does not exist
    #[error("customer not found")]
    NotFound,

    /// A uniqueness constraint was violated (duplicate email)
    #[error("email already exists")]
    Conflict,

    /// Any other storage or infrastructure failure
    #[error("storage operation failed: {0}")]
    StorageFailure(String),
}

impl CustomerError {
    /// Create a storage failure error with a message
    pub fn storage_failure(msg: impl Into<String>) -> Self {
        Self::StorageFailure(msg.into())
    }

    /// Whether this error is the explicit not-found signal
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Whether this error is a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict)
    }
}

/// Result type alias for customer operations
pub type Result<T> = std::result::Result<T, CustomerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_failure_error() {
        let err = CustomerError::storage_failure("connection refused");
        assert!(matches!(err, CustomerError::StorageFailure(_)));
        assert_eq!(
            err.to_string(),
            "storage operation failed: connection refused"
        );
    }

    #[test]
    fn test_not_found_error() {
        let err = CustomerError::NotFound;
        assert!(err.is_not_found());
        assert!(!err.is_conflict());
        assert_eq!(err.to_string(), "customer not found");
    }

    #[test]
    fn test_conflict_error() {
        let err = CustomerError::Conflict;
        assert!(err.is_conflict());
        assert_eq!(err.to_string(), "email already exists");
    }
}
