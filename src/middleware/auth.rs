use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap},
};

use crate::auth::{self, Claims};
use crate::error::ApiError;

/// Authenticated admin context extracted from a bearer JWT.
///
/// Implemented as an extractor rather than a router layer so that public
/// reads and protected writes can share the same route paths.
#[derive(Clone, Debug)]
pub struct AuthAdmin {
    pub username: String,
    pub role: String,
    pub token_id: String,
}

impl From<Claims> for AuthAdmin {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.username,
            role: claims.role,
            token_id: claims.jti,
        }
    }
}

#[axum::async_trait]
impl<S> FromRequestParts<S> for AuthAdmin
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = extract_bearer(&parts.headers)
            .ok_or_else(|| ApiError::unauthorized("Unauthorized. Please login as admin."))?;

        let claims = auth::verify_token(&token)
            .map_err(|_| ApiError::unauthorized("Unauthorized. Invalid or expired token."))?;

        Ok(AuthAdmin::from(claims))
    }
}

/// Pull the token out of `Authorization: Bearer <token>`. Anything else is
/// treated as absent.
fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get("authorization")?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_bearer_token() {
        let headers = headers_with("Bearer abc.def.ghi");
        assert_eq!(extract_bearer(&headers).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn rejects_missing_or_malformed_header() {
        assert_eq!(extract_bearer(&HeaderMap::new()), None);
        assert_eq!(extract_bearer(&headers_with("Basic abc")), None);
        assert_eq!(extract_bearer(&headers_with("Bearer ")), None);
        assert_eq!(extract_bearer(&headers_with("abc.def.ghi")), None);
    }
}
