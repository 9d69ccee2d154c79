use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SecurityConfig;

/// Token payload. `exp` is optional so tokens minted without an expiry
/// still verify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,
}

impl Claims {
    pub fn new(username: impl Into<String>, is_admin: bool, security: &SecurityConfig) -> Self {
        let now = Utc::now();
        let exp = match security.jwt_expiry_hours {
            0 => None,
            hours => Some((now + Duration::hours(hours as i64)).timestamp()),
        };

        Self {
            username: username.into(),
            is_admin,
            iat: now.timestamp(),
            exp,
        }
    }
}

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("Invalid JWT secret")]
    InvalidSecret,

    #[error("Invalid JWT token: {0}")]
    InvalidToken(String),
}

/// Sign a token for `username` with the configured secret (HS256)
pub fn create_token(username: &str, is_admin: bool, security: &SecurityConfig) -> Result<String, JwtError> {
    let secret = &security.secret_key;

    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let claims = Claims::new(username, is_admin, security);
    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    let header = Header::new(Algorithm::HS256);

    encode(&header, &claims, &encoding_key)
        .map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

/// Verify a token's signature (and expiry, when present) and return its claims
pub fn verify_token(token: &str, security: &SecurityConfig) -> Result<Claims, JwtError> {
    let secret = &security.secret_key;

    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();

    let token_data = decode::<Claims>(token, &decoding_key, &validation)
        .map_err(|e| JwtError::InvalidToken(e.to_string()))?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;

    fn security(secret: &str) -> SecurityConfig {
        let mut security = AppConfig::test().security;
        security.secret_key = secret.to_string();
        security
    }

    #[test]
    fn round_trips_username_and_admin_flag() {
        let security = security("test-secret");
        let token = create_token("u2", true, &security).unwrap();
        let claims = verify_token(&token, &security).unwrap();
        assert_eq!(claims.username, "u2");
        assert!(claims.is_admin);
        assert!(claims.exp.is_some());
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let token = create_token("u1", false, &security("one")).unwrap();
        assert!(matches!(
            verify_token(&token, &security("two")),
            Err(JwtError::InvalidToken(_))
        ));
    }

    #[test]
    fn accepts_token_without_expiry() {
        let mut security = security("test-secret");
        security.jwt_expiry_hours = 0;
        let token = create_token("u1", false, &security).unwrap();
        let claims = verify_token(&token, &security).unwrap();
        assert_eq!(claims.exp, None);
        assert!(!claims.is_admin);
    }

    #[test]
    fn rejects_expired_token() {
        let security = security("test-secret");
        let claims = Claims {
            username: "u1".to_string(),
            is_admin: false,
            iat: 0,
            exp: Some(1_000),
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(security.secret_key.as_bytes()),
        )
        .unwrap();
        assert!(verify_token(&token, &security).is_err());
    }

    #[test]
    fn rejects_garbage_and_empty_secret() {
        assert!(verify_token("not-a-token", &security("s")).is_err());
        assert!(matches!(create_token("u1", false, &security("")), Err(JwtError::InvalidSecret)));
    }
}
