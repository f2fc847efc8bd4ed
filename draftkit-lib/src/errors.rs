//! Error types for draft operations.
//!
//! Every fallible operation in the crate returns [`DraftkitError`]. Each
//! variant maps to a stable [`DraftkitErrorCode`] so front ends can branch on
//! the kind of failure without parsing messages.

/// Stable error codes for front-end integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum DraftkitErrorCode {
    /// Submission attempted with the wrong number of items
    Validation = 1000,
    /// Catalog source unavailable or returned unusable data
    CatalogFetch = 2000,
    /// Invalid input data (constraints, config, amounts)
    InvalidData = 3000,
    /// Submission collaborator rejected or failed the hand-off
    Submission = 4000,
    /// Serialization error
    Serialization = 5000,
    /// Filesystem error
    Io = 6000,
}

/// Error type for draft operations.
#[derive(Debug, thiserror::Error)]
pub enum DraftkitError {
    /// The selection does not contain exactly the required number of items.
    #[error("please select exactly {required} items ({selected} selected)")]
    Validation {
        /// Number of items a valid submission must contain
        required: usize,
        /// Number of items currently selected
        selected: usize,
    },

    /// The catalog could not be fetched or mapped into typed items.
    #[error("catalog unavailable: {0}")]
    CatalogFetch(String),

    /// Invalid data provided.
    #[error("invalid {field}: {reason}")]
    InvalidData {
        /// Field or parameter name
        field: String,
        /// Reason for invalidity
        reason: String,
    },

    /// The submission collaborator failed.
    #[error("submission failed: {0}")]
    Submission(String),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Filesystem error.
    #[error("io error: {0}")]
    Io(String),
}

impl DraftkitError {
    /// Get the error code.
    pub fn code(&self) -> DraftkitErrorCode {
        match self {
            Self::Validation { .. } => DraftkitErrorCode::Validation,
            Self::CatalogFetch(_) => DraftkitErrorCode::CatalogFetch,
            Self::InvalidData { .. } => DraftkitErrorCode::InvalidData,
            Self::Submission(_) => DraftkitErrorCode::Submission,
            Self::Serialization(_) => DraftkitErrorCode::Serialization,
            Self::Io(_) => DraftkitErrorCode::Io,
        }
    }

    /// Returns true if the session can recover from this error locally
    /// (by substituting the fallback catalog).
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::CatalogFetch(_))
    }

    /// Create a catalog fetch error from any error type.
    pub fn catalog_fetch<E: std::fmt::Display>(err: E) -> Self {
        Self::CatalogFetch(err.to_string())
    }

    /// Create an invalid data error.
    pub fn invalid_data(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidData {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for DraftkitError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<std::io::Error> for DraftkitError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_required_count() {
        let err = DraftkitError::Validation {
            required: 3,
            selected: 2,
        };
        assert_eq!(err.code(), DraftkitErrorCode::Validation);
        assert!(err.to_string().contains("exactly 3"));
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_catalog_fetch_is_recoverable() {
        let err = DraftkitError::catalog_fetch("connection refused");
        assert_eq!(err.code(), DraftkitErrorCode::CatalogFetch);
        assert!(err.is_recoverable());
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_helper_constructors() {
        let err = DraftkitError::invalid_data("budget_limit", "must not be negative");
        assert_eq!(err.code(), DraftkitErrorCode::InvalidData);
        assert_eq!(err.to_string(), "invalid budget_limit: must not be negative");

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert_eq!(DraftkitError::from(io).code(), DraftkitErrorCode::Io);
    }
}
