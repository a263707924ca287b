//! Auth orchestrator for doorman.
//!
//! Composes validation, hashing and the account store into the two
//! end-to-end operations, `register` and `login`. Every failure path
//! returns an [`AuthError`] whose display string is the user-facing
//! message; no storage detail leaks past this boundary.

use thiserror::Error;
use tracing::{error, info};

use super::crypto;
use super::validation::{self, ValidationError};
use crate::db::{Database, NewUser, User, UserRepository};
use crate::DoormanError;

/// Length in bytes of the random portion of an issued token.
const TOKEN_RANDOM_LEN: usize = 16;

/// Failure outcome of a register/login call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Name, email or password failed the validation policy.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An account with this email already exists.
    ///
    /// Raised by the pre-check or by the store's UNIQUE constraint; the
    /// constraint is the source of truth and both paths report the same
    /// message.
    #[error("User with this email already exists")]
    EmailTaken,

    /// Password hashing was unavailable.
    ///
    /// The provider chain in [`crate::auth::crypto`] makes this
    /// unreachable in practice, but the kind is kept so hashing
    /// degradation-to-failure has a defined result path.
    #[error("Failed to hash password: {0}")]
    HashingUnavailable(String),

    /// The store rejected the insert for a reason other than uniqueness.
    #[error("Failed to create user account")]
    CreateFailed,

    /// The freshly created account could not be read back.
    ///
    /// Signals a store-consistency anomaly.
    #[error("Failed to retrieve created user")]
    RetrieveFailed,

    /// Unknown email or wrong password.
    ///
    /// Deliberately identical for both cases so the message cannot be
    /// used to enumerate accounts.
    #[error("Invalid email or password")]
    InvalidCredentials,
}

impl AuthError {
    /// Whether this failure is user-correctable input (HTTP 400 class).
    pub fn is_validation(&self) -> bool {
        matches!(self, AuthError::Validation(_) | AuthError::EmailTaken)
    }
}

/// Successful outcome of a register/login call.
#[derive(Debug, Clone)]
pub struct AuthResult {
    /// Human-readable message.
    pub message: String,
    /// Opaque bearer token.
    pub token: String,
    /// The account involved.
    pub user: User,
}

/// Orchestrates registration and login against the account store.
///
/// Holds the store handle for its entire lifetime; calls run to
/// completion synchronously with no retries, cross-call locks or
/// transactions.
#[derive(Debug, Clone)]
pub struct AuthService {
    db: Database,
}

impl AuthService {
    /// Create a new service over the given database.
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Register a new account.
    ///
    /// Validates input, rejects duplicate emails, hashes the password
    /// and reads the created row back for its store-assigned id and
    /// timestamps.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<AuthResult, AuthError> {
        validation::validate_name(name)?;
        validation::validate_email(email)?;
        validation::validate_password(password)?;

        let repo = UserRepository::new(self.db.pool());

        // Fast path for a better message; the UNIQUE constraint below
        // remains the source of truth under concurrent registration
        if repo.exists(email).await.map_err(storage_create_failed)? {
            return Err(AuthError::EmailTaken);
        }

        let password_hash = crypto::hash_password(password, None);

        match repo.create(&NewUser::new(name, email, &password_hash)).await {
            Ok(()) => {}
            Err(DoormanError::UniqueViolation(_)) => return Err(AuthError::EmailTaken),
            Err(e) => {
                error!("user insert failed: {e}");
                return Err(AuthError::CreateFailed);
            }
        }

        let user = repo
            .get_by_email(email)
            .await
            .map_err(storage_retrieve_failed)?
            .ok_or(AuthError::RetrieveFailed)?;

        info!(user_id = user.id, "user registered");

        Ok(AuthResult {
            message: "User registered successfully".to_string(),
            token: self.issue_token(&user),
            user,
        })
    }

    /// Authenticate an existing account.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResult, AuthError> {
        validation::validate_email(email)?;

        let repo = UserRepository::new(self.db.pool());

        let user = match repo.get_by_email(email).await {
            Ok(Some(user)) => user,
            // Missing account and store failure both collapse into the
            // non-specific credential message
            Ok(None) => return Err(AuthError::InvalidCredentials),
            Err(e) => {
                error!("user lookup failed: {e}");
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !crypto::verify_password(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        info!(user_id = user.id, "user logged in");

        Ok(AuthResult {
            message: "Login successful".to_string(),
            token: self.issue_token(&user),
            user,
        })
    }

    /// Issue an opaque bearer token: `"{id}:{email}:{random-hex}"`.
    ///
    /// Not a verifiable credential: no expiry, no signature, no
    /// server-side session record. A production deployment layers real
    /// session verification on top of this contract.
    fn issue_token(&self, user: &User) -> String {
        format!(
            "{}:{}:{}",
            user.id,
            user.email,
            crypto::generate_token(TOKEN_RANDOM_LEN)
        )
    }
}

fn storage_create_failed(e: DoormanError) -> AuthError {
    error!("account store error: {e}");
    AuthError::CreateFailed
}

fn storage_retrieve_failed(e: DoormanError) -> AuthError {
    error!("account store error: {e}");
    AuthError::RetrieveFailed
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_service() -> AuthService {
        AuthService::new(Database::open_in_memory().await.unwrap())
    }

    #[tokio::test]
    async fn test_register_and_login_end_to_end() {
        let service = test_service().await;

        let result = service
            .register("Alice", "alice@example.com", "Secret123")
            .await
            .unwrap();
        assert_eq!(result.message, "User registered successfully");
        assert_eq!(result.user.name, "Alice");
        assert_eq!(result.user.email, "alice@example.com");
        assert!(!result.token.is_empty());
        assert!(result.user.id > 0);

        let login = service.login("alice@example.com", "Secret123").await.unwrap();
        assert_eq!(login.message, "Login successful");
        assert_eq!(login.user.id, result.user.id);
        assert!(!login.token.is_empty());
    }

    #[tokio::test]
    async fn test_register_short_name() {
        let service = test_service().await;
        let err = service
            .register("A", "a@b.com", "Abc12345")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Name must be at least 2 characters long");
        assert!(err.is_validation());
    }

    #[tokio::test]
    async fn test_register_bad_email_no_store_write() {
        let service = test_service().await;
        let err = service
            .register("Alice", "not-an-email", "Abc12345")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid email format");

        // Nothing was persisted
        let repo = UserRepository::new(service.db.pool());
        assert!(!repo.exists("not-an-email").await.unwrap());
    }

    #[tokio::test]
    async fn test_register_weak_password_priority() {
        let service = test_service().await;
        // "short" also lacks uppercase and digits, but length wins
        let err = service
            .register("Alice", "a@b.com", "short")
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Password must be at least 8 characters long"
        );
    }

    #[tokio::test]
    async fn test_register_duplicate_email() {
        let service = test_service().await;
        service
            .register("A user", "a@b.com", "Abc12345")
            .await
            .unwrap();

        let err = service
            .register("B user", "a@b.com", "Xyz98765")
            .await
            .unwrap_err();
        assert_eq!(err, AuthError::EmailTaken);
        assert_eq!(err.to_string(), "User with this email already exists");
    }

    #[tokio::test]
    async fn test_login_enumeration_resistance() {
        let service = test_service().await;
        service
            .register("Alice", "a@b.com", "Abc12345")
            .await
            .unwrap();

        let missing = service
            .login("missing@x.com", "whatever")
            .await
            .unwrap_err();
        let wrong_pass = service.login("a@b.com", "wrongpass").await.unwrap_err();

        assert_eq!(missing, wrong_pass);
        assert_eq!(missing.to_string(), "Invalid email or password");
    }

    #[tokio::test]
    async fn test_login_invalid_email_format() {
        let service = test_service().await;
        let err = service.login("not-an-email", "whatever").await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid email format");
    }

    #[tokio::test]
    async fn test_stored_digest_is_not_plaintext() {
        let service = test_service().await;
        let result = service
            .register("Alice", "a@b.com", "Secret123")
            .await
            .unwrap();

        assert_ne!(result.user.password_hash, "Secret123");
        assert!(!result.user.password_hash.contains("Secret123"));
        let (salt, hash) = result.user.password_hash.split_once(':').unwrap();
        assert_eq!(salt.len(), 32);
        assert_eq!(hash.len(), 64);
    }

    #[tokio::test]
    async fn test_token_shape() {
        let service = test_service().await;
        let result = service
            .register("Alice", "alice@example.com", "Secret123")
            .await
            .unwrap();

        let mut parts = result.token.splitn(3, ':');
        assert_eq!(parts.next().unwrap(), result.user.id.to_string());
        assert_eq!(parts.next().unwrap(), "alice@example.com");
        let random = parts.next().unwrap();
        assert_eq!(random.len(), TOKEN_RANDOM_LEN * 2);
        assert!(random.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn test_tokens_are_fresh_per_call() {
        let service = test_service().await;
        service
            .register("Alice", "a@b.com", "Secret123")
            .await
            .unwrap();

        let first = service.login("a@b.com", "Secret123").await.unwrap();
        let second = service.login("a@b.com", "Secret123").await.unwrap();
        assert_ne!(first.token, second.token);
    }
}
