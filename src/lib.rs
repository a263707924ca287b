//! doorman - a minimal authentication backend.
//!
//! Registers user accounts and authenticates logins against a SQLite
//! credential store, exposed over HTTP.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod web;

pub use auth::{
    generate_token, hash_password, is_valid_email, validate_name, validate_password,
    verify_password, AuthError, AuthResult, AuthService, RngTier, ValidationError,
};
pub use config::Config;
pub use db::{Database, NewUser, User, UserRepository};
pub use error::{DoormanError, Result};
pub use web::{ApiError, WebServer};
