//! Authentication handlers.

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;
use tracing::debug;

use crate::auth::AuthService;
use crate::web::dto::{AuthResponse, LoginRequest, RegisterRequest};
use crate::web::error::ApiError;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Auth orchestrator.
    pub auth: AuthService,
}

impl AppState {
    /// Create a new application state.
    pub fn new(auth: AuthService) -> Self {
        Self { auth }
    }
}

/// POST /api/auth/register - Register a new account.
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    if req.name.is_empty() || req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request(
            "Name, email, and password are required",
        ));
    }

    debug!(email = %req.email, "registration attempt");

    let result = state
        .auth
        .register(&req.name, &req.email, &req.password)
        .await?;

    Ok((StatusCode::CREATED, Json(AuthResponse::new(result))))
}

/// POST /api/auth/login - Authenticate an account.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    if req.email.is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("Email and password are required"));
    }

    debug!(email = %req.email, "login attempt");

    let result = state.auth.login(&req.email, &req.password).await?;

    Ok(Json(AuthResponse::new(result)))
}
