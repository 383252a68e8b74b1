// crates/server/src/auth.rs
//! Bearer-token authentication for `/api` routes.
//!
//! Access tokens are HS256 JWTs minted by the identity service. We verify the
//! signature and expiry and require `token_type == "access"`, so refresh
//! tokens signed with the same secret are refused.

use std::fmt;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Bearer, Authorization, HeaderMapExt};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

pub const ACCESS_TOKEN_TYPE: &str = "access";

/// User identifier claim. Issued as an integer primary key, but string ids
/// are accepted too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Int(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Int(id) => write!(f, "{id}"),
            UserId::Text(id) => f.write_str(id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub user_id: UserId,
    pub token_type: String,
    pub exp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jti: Option<String>,
}

/// Decode and validate an access token.
pub fn verify_access_token(token: &str, key: &DecodingKey) -> Result<AccessClaims, ApiError> {
    let validation = Validation::new(Algorithm::HS256);

    let data = decode::<AccessClaims>(token, key, &validation)
        .map_err(|err| ApiError::Unauthorized(format!("invalid token: {err}")))?;

    if data.claims.token_type != ACCESS_TOKEN_TYPE {
        return Err(ApiError::Unauthorized(format!(
            "expected an access token, got {:?}",
            data.claims.token_type
        )));
    }
    Ok(data.claims)
}

/// Middleware: reject requests without a valid bearer access token. Verified
/// claims are stored in the request extensions. A no-op when auth is
/// disabled.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(key) = state.auth_key.as_ref() else {
        return Ok(next.run(request).await);
    };

    let bearer = request
        .headers()
        .typed_get::<Authorization<Bearer>>()
        .ok_or_else(|| ApiError::Unauthorized("missing bearer token".into()))?;

    let claims = verify_access_token(bearer.token(), key)?;
    tracing::debug!(user_id = %claims.user_id, "Authenticated request");
    request.extensions_mut().insert(claims);

    Ok(next.run(request).await)
}
