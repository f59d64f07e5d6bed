//! JWT access- and refresh-token generation and validation.
//!
//! Both token kinds are HS256-signed JWTs carrying a [`Claims`] payload.
//! The `kind` claim keeps a refresh token from being accepted as a bearer
//! token and vice versa.

use chrono::{DateTime, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thekedar_core::types::{DbId, Timestamp};

use crate::config::env_or;

/// Which of the two session tokens a JWT is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Access,
    Refresh,
}

/// Payload of every session token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: DbId,
    /// Phone verified at login.
    pub phone: String,
    pub kind: TokenKind,
    /// Unix seconds.
    pub exp: i64,
    /// Unix seconds.
    pub iat: i64,
}

/// The only signing algorithm issued or accepted.
const ALGORITHM: Algorithm = Algorithm::HS256;

const DEFAULT_ACCESS_EXPIRY_HOURS: i64 = 24;
const DEFAULT_REFRESH_EXPIRY_DAYS: i64 = 7;

/// Signing secret and token lifetimes.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry_hours: i64,
    pub refresh_token_expiry_days: i64,
}

impl JwtConfig {
    /// Read `JWT_SECRET` (required), `JWT_ACCESS_EXPIRY_HOURS` (24) and
    /// `JWT_REFRESH_EXPIRY_DAYS` (7).
    ///
    /// # Panics
    ///
    /// Panics when the secret is missing or blank, or a lifetime does not
    /// parse.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_default();
        assert!(!secret.trim().is_empty(), "JWT_SECRET must be set and non-empty");

        Self {
            secret,
            access_token_expiry_hours: env_or(
                "JWT_ACCESS_EXPIRY_HOURS",
                DEFAULT_ACCESS_EXPIRY_HOURS,
            ),
            refresh_token_expiry_days: env_or(
                "JWT_REFRESH_EXPIRY_DAYS",
                DEFAULT_REFRESH_EXPIRY_DAYS,
            ),
        }
    }

    fn lifetime(&self, kind: TokenKind) -> chrono::Duration {
        match kind {
            TokenKind::Access => chrono::Duration::hours(self.access_token_expiry_hours),
            TokenKind::Refresh => chrono::Duration::days(self.refresh_token_expiry_days),
        }
    }

    fn encoding_key(&self) -> EncodingKey {
        EncodingKey::from_secret(self.secret.as_bytes())
    }

    fn decoding_key(&self) -> DecodingKey {
        DecodingKey::from_secret(self.secret.as_bytes())
    }
}

/// A signed token together with its expiry.
#[derive(Debug, Clone)]
pub struct SignedToken {
    pub token: String,
    pub expires_at: Timestamp,
}

/// Sign a token of `kind` for a user, valid from now for the configured
/// lifetime.
pub fn generate_token(
    user_id: DbId,
    phone: &str,
    kind: TokenKind,
    config: &JwtConfig,
) -> Result<SignedToken, jsonwebtoken::errors::Error> {
    let issued = Utc::now();
    let expires = issued + config.lifetime(kind);
    let claims = Claims {
        sub: user_id,
        phone: phone.to_owned(),
        kind,
        exp: expires.timestamp(),
        iat: issued.timestamp(),
    };

    let token = encode(&Header::new(ALGORITHM), &claims, &config.encoding_key())?;

    Ok(SignedToken {
        token,
        // Whole seconds, so the reported expiry equals `exp`.
        expires_at: DateTime::from_timestamp(claims.exp, 0).unwrap_or(expires),
    })
}

/// Decode a token after checking signature, algorithm and expiry.
///
/// Whether the kind fits the use is for the caller to decide.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(token, &config.decoding_key(), &Validation::new(ALGORITHM))
        .map(|data| data.claims)
}
