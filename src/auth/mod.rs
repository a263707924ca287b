//! Authentication module for doorman.
//!
//! Password hashing, input validation policy, and the orchestrator
//! behind the register/login operations.

pub mod crypto;
mod service;
pub mod validation;

pub use crypto::{
    generate_token, hash_password, verify_password, RngTier, DEFAULT_SALT_LEN, DEFAULT_TOKEN_LEN,
};
pub use service::{AuthError, AuthResult, AuthService};
pub use validation::{is_valid_email, validate_name, validate_password, ValidationError};
