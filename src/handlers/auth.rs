use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::auth::{self, Claims};
use crate::error::ApiError;
use crate::middleware::{AuthAdmin, JsonBody};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// POST /api/admin/login - issue an admin session token.
///
/// No database access: credentials are checked against process config and
/// the token is signed in-process.
pub async fn login(JsonBody(payload): JsonBody<LoginRequest>) -> Result<Json<Value>, ApiError> {
    if payload.username.is_empty() || payload.password.is_empty() {
        return Err(ApiError::bad_request("username and password are required"));
    }

    if !auth::verify_credentials(&payload.username, &payload.password) {
        // Generic on purpose: never say which check failed.
        return Err(ApiError::unauthorized("Invalid admin credentials"));
    }

    let claims = Claims::admin(&payload.username);
    let token = auth::generate_token(&claims)?;

    Ok(Json(json!({ "token": token, "message": "Login successful" })))
}

/// GET /api/admin/verify - confirm the presented token is still valid.
pub async fn verify(_admin: AuthAdmin) -> Json<Value> {
    Json(json!({ "ok": true }))
}

/// POST /api/admin/logout - stateless; the client discards its token. A
/// logged-out token stays cryptographically valid until natural expiry.
pub async fn logout(_admin: AuthAdmin) -> Json<Value> {
    Json(json!({ "message": "Logged out" }))
}
