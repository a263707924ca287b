//! Input validation policy for doorman registration and login.
//!
//! Pure functions, no I/O. Error display strings are the exact
//! user-facing messages returned over the API.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Minimum display name length in characters.
pub const MIN_NAME_LENGTH: usize = 2;

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name is empty or too short.
    #[error("Name must be at least {MIN_NAME_LENGTH} characters long")]
    NameTooShort,

    /// Email format is invalid.
    #[error("Invalid email format")]
    InvalidEmail,

    /// Password is too short.
    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters long")]
    PasswordTooShort,

    /// Password has no uppercase letter.
    #[error("Password must contain at least one uppercase letter")]
    PasswordNoUppercase,

    /// Password has no lowercase letter.
    #[error("Password must contain at least one lowercase letter")]
    PasswordNoLowercase,

    /// Password has no digit.
    #[error("Password must contain at least one number")]
    PasswordNoDigit,
}

// local-part@domain.tld, final label 2+ letters. Purely syntactic; no
// DNS or deliverability check.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Check whether an email address is syntactically valid.
///
/// # Examples
///
/// ```
/// use doorman::auth::validation::is_valid_email;
///
/// assert!(is_valid_email("alice@example.com"));
/// assert!(!is_valid_email("not-an-email"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate an email address.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

/// Validate a password against the policy.
///
/// Fails with the first violation found, in this order: length,
/// missing uppercase, missing lowercase, missing digit. There is no
/// maximum length and no blacklist.
///
/// # Examples
///
/// ```
/// use doorman::auth::validation::validate_password;
///
/// assert!(validate_password("Abc12345").is_ok());
/// assert!(validate_password("short").is_err());
/// ```
pub fn validate_password(password: &str) -> Result<(), ValidationError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::PasswordNoUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(ValidationError::PasswordNoLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PasswordNoDigit);
    }
    Ok(())
}

/// Validate a display name: non-empty and at least 2 characters.
///
/// Raw character count, no trimming or normalization.
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.chars().count() < MIN_NAME_LENGTH {
        return Err(ValidationError::NameTooShort);
    }
    Ok(())
}
