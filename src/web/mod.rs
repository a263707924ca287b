//! Web API module for doorman.
//!
//! Thin HTTP glue over the auth orchestrator: routing, JSON
//! marshalling, CORS, and status-code mapping.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use router::create_router;
pub use server::WebServer;
