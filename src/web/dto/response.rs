//! Response DTOs for the Web API.

use serde::Serialize;

use crate::db::User;

/// Successful auth response.
///
/// `{"success": true, "message": .., "token": .., "user": {..}}`
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    /// Always true on this shape.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
    /// Opaque bearer token.
    pub token: String,
    /// Public account fields.
    pub user: UserInfo,
}

impl AuthResponse {
    /// Build a success response from an orchestrator result.
    pub fn new(result: crate::auth::AuthResult) -> Self {
        Self {
            success: true,
            message: result.message,
            token: result.token,
            user: UserInfo::from(&result.user),
        }
    }
}

/// Public account fields in responses.
///
/// The credential digest is deliberately absent; it must never appear
/// in any payload.
#[derive(Debug, Serialize)]
pub struct UserInfo {
    /// User ID.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl From<&User> for UserInfo {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Failure response: `{"success": false, "message": ..}`.
#[derive(Debug, Serialize)]
pub struct FailureResponse {
    /// Always false on this shape.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
}

impl FailureResponse {
    /// Build a failure response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service name.
    pub service: &'static str,
    /// Crate version.
    pub version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 7,
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "salt:hash".to_string(),
            created_at: 1_700_000_000,
            updated_at: 1_700_000_000,
        }
    }

    #[test]
    fn test_user_info_excludes_digest() {
        let json = serde_json::to_value(UserInfo::from(&sample_user())).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Alice");
        assert_eq!(json["email"], "alice@example.com");
        assert!(json.get("password_hash").is_none());
        assert!(!json.to_string().contains("salt:hash"));
    }

    #[test]
    fn test_failure_response_shape() {
        let json = serde_json::to_value(FailureResponse::new("nope")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "nope");
    }
}
