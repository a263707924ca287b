//! User model for doorman.

/// User entity representing a registered account.
///
/// Timestamps are elapsed seconds since the Unix epoch, normalized at
/// read time regardless of how SQLite stores the wall-clock value.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct User {
    /// Unique user ID, assigned by the store and immutable.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address (unique, case-sensitive as stored).
    pub email: String,
    /// Credential digest ("<salt>:<hash>"), never the plaintext password.
    pub password_hash: String,
    /// Account creation time (epoch seconds).
    pub created_at: i64,
    /// Last update time (epoch seconds).
    pub updated_at: i64,
}

/// Data for creating a new user.
#[derive(Debug, Clone)]
pub struct NewUser {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Credential digest (must be pre-hashed).
    pub password_hash: String,
}

impl NewUser {
    /// Create a new user record.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }
}
