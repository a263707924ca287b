//! Error types for doorman.

use thiserror::Error;

/// Common error type for doorman.
#[derive(Error, Debug)]
pub enum DoormanError {
    /// Database error.
    ///
    /// Generic database error wrapping failures from the storage engine.
    #[error("database error: {0}")]
    Database(String),

    /// A UNIQUE constraint rejected an insert.
    ///
    /// Kept separate from [`DoormanError::Database`] so callers can turn a
    /// duplicate-email insert into a user-facing conflict instead of an
    /// opaque storage failure.
    #[error("unique constraint violated: {0}")]
    UniqueViolation(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

// Conversion from sqlx errors, preserving unique-constraint violations.
impl From<sqlx::Error> for DoormanError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DoormanError::UniqueViolation(db_err.to_string());
            }
        }
        DoormanError::Database(e.to_string())
    }
}

/// Result type alias for doorman operations.
pub type Result<T> = std::result::Result<T, DoormanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_error_display() {
        let err = DoormanError::Database("disk full".to_string());
        assert_eq!(err.to_string(), "database error: disk full");
    }

    #[test]
    fn test_validation_error_display() {
        let err = DoormanError::Validation("email too long".to_string());
        assert_eq!(err.to_string(), "validation error: email too long");
    }

    #[test]
    fn test_not_found_error_display() {
        let err = DoormanError::NotFound("user".to_string());
        assert_eq!(err.to_string(), "user not found");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DoormanError = io_err.into();
        assert!(matches!(err, DoormanError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_result_alias() {
        fn sample_ok() -> Result<i32> {
            Ok(42)
        }

        fn sample_err() -> Result<i32> {
            Err(DoormanError::Config("bad port".to_string()))
        }

        assert_eq!(sample_ok().unwrap(), 42);
        assert!(sample_err().is_err());
    }
}
