//! Access-token management.
//!
//! Login issues a signed JWT whose `sub` claim carries the user id; the
//! auth middleware verifies it on every protected request. The signing
//! secret comes from the `JWT_SECRET` environment variable.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Access tokens expire after 24 hours.
const TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

/// JWT claims carried by an access token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id (e.g. `user-…`).
    pub sub: String,
    /// Username at the time the token was issued.
    pub username: String,
    /// Expiration time (Unix timestamp).
    pub exp: u64,
    /// Issued at time (Unix timestamp).
    pub iat: u64,
}

fn jwt_secret() -> String {
    std::env::var("JWT_SECRET").unwrap_or_else(|_| {
        tracing::warn!("JWT_SECRET not set, using a development default");
        "development-secret-change-in-production".to_string()
    })
}

/// Create an access token for a user.
pub fn create_token(
    user_id: &str,
    username: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs();

    let claims = Claims {
        sub: user_id.to_string(),
        username: username.to_string(),
        exp: now + TOKEN_TTL_SECS,
        iat: now,
    };

    let key = EncodingKey::from_secret(jwt_secret().as_ref());

    encode(&Header::default(), &claims, &key)
}

/// Verify an access token and return its claims.
///
/// Fails on a bad signature, malformed token, or expired `exp`.
pub fn verify_token(token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let key = DecodingKey::from_secret(jwt_secret().as_ref());

    decode::<Claims>(token, &key, &Validation::default()).map(|data| data.claims)
}
