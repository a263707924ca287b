//! User repository for doorman.
//!
//! Single-statement, parameterized account operations. Accounts are
//! created once and never updated or deleted here; email uniqueness is
//! enforced by the UNIQUE constraint, with any application-level
//! pre-check being only a fast path.

use sqlx::SqlitePool;

use super::user::{NewUser, User};
use crate::Result;

// Timestamps are stored as datetime text but always read back as epoch
// seconds.
const SELECT_USER: &str = "SELECT id, name, email, password_hash,
        CAST(strftime('%s', created_at) AS INTEGER) AS created_at,
        CAST(strftime('%s', updated_at) AS INTEGER) AS updated_at
 FROM users";

/// Repository for account storage operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository over the given pool.
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user row with store-assigned id and timestamps.
    ///
    /// A duplicate email surfaces as [`crate::DoormanError::UniqueViolation`].
    pub async fn create(&self, new_user: &NewUser) -> Result<()> {
        sqlx::query(
            "INSERT INTO users (name, email, password_hash, created_at, updated_at)
             VALUES (?, ?, ?, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)",
        )
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Look up a user by email (case-sensitive).
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE email = ?"))
            .bind(email)
            .fetch_optional(self.pool)
            .await?;

        Ok(user)
    }

    /// Look up a user by id.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(&format!("{SELECT_USER} WHERE id = ?"))
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(user)
    }

    /// Check whether an account exists for the given email.
    ///
    /// Defined as `get_by_email` having a result, not a separate
    /// storage-level check.
    pub async fn exists(&self, email: &str) -> Result<bool> {
        Ok(self.get_by_email(email).await?.is_some())
    }
}
