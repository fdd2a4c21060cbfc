//! Bearer token authentication.

use std::time::Duration;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::RequestPartsExt;
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::Authorization;
use axum_extra::TypedHeader;
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Issuer claim carried by every access token.
pub const TOKEN_ISSUER: &str = "tubely-access";

/// Access token claims.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    pub iss: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
}

/// Verifies HS256 access tokens against the server secret.
pub struct JwtVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl JwtVerifier {
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[TOKEN_ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verify a token and return the user ID in its subject.
    pub fn verify(&self, token: &str) -> ApiResult<Uuid> {
        let data = decode::<Claims>(token, &self.key, &self.validation).map_err(|e| {
            debug!("Token verification failed: {}", e);
            ApiError::unauthenticated("Couldn't validate JWT")
        })?;

        Uuid::parse_str(&data.claims.sub)
            .map_err(|_| ApiError::unauthenticated("Couldn't validate JWT"))
    }
}

/// Sign an access token for `user_id`, valid for `ttl`.
pub fn issue_token(
    secret: &str,
    user_id: Uuid,
    ttl: Duration,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        iss: TOKEN_ISSUER.to_string(),
        iat: now,
        exp: now + ttl.as_secs() as i64,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

/// Authenticated user extracted from the `Authorization: Bearer` header.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser {
    pub user_id: Uuid,
}

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| ApiError::unauthenticated("Couldn't find JWT"))?;

        let user_id = state.jwt.verify(bearer.token())?;
        Ok(AuthUser { user_id })
    }
}
