use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::config;

/// Claims carried by an admin session token. There is no server-side
/// session store; the signed token is the whole session.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub role: String,
    pub username: String,
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    /// Fresh admin claims with a unique token id and the configured expiry
    /// window (12 hours by default).
    pub fn admin(username: &str) -> Self {
        let now = Utc::now();
        let expiry_hours = config::config().security.jwt_expiry_hours;

        Self {
            role: "admin".to_string(),
            username: username.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(expiry_hours)).timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),
    #[error("Invalid or expired token")]
    InvalidToken,
    #[error("JWT secret is not configured")]
    MissingSecret,
}

/// Plain equality check against the configured admin credentials. A
/// mismatch is reported generically by the caller, never saying which of
/// the two values was wrong.
pub fn verify_credentials(username: &str, password: &str) -> bool {
    let admin = &config::config().admin;
    username == admin.username && password == admin.password
}

pub fn generate_token(claims: &Claims) -> Result<String, AuthError> {
    sign_with(claims, &config::config().security.jwt_secret)
}

pub fn verify_token(token: &str) -> Result<Claims, AuthError> {
    decode_with(token, &config::config().security.jwt_secret)
}

fn sign_with(claims: &Claims, secret: &str) -> Result<String, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), claims, &encoding_key)
        .map_err(|e| AuthError::TokenGeneration(e.to_string()))
}

fn decode_with(token: &str, secret: &str) -> Result<Claims, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
        .map_err(|_| AuthError::InvalidToken)?;

    Ok(token_data.claims)
}
