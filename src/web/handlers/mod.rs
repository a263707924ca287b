//! API handlers for the Web API.

pub mod auth;

pub use auth::{login, register, AppState};
