//! Authentication Service
//!
//! There are no user accounts: a single configured admin password gates
//! the listing endpoints. A correct password is exchanged for a signed,
//! time-limited JWT that the admin routes verify per request.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::JwtSettings;

/// Subject claim used for admin tokens
const ADMIN_SUBJECT: &str = "admin";

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (always "admin")
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

/// A signed admin token
#[derive(Debug, Clone)]
pub struct AuthToken {
    pub token: String,
    pub expires_in: i64,
}

/// Authentication errors
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid password")]
    InvalidPassword,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token")]
    InvalidToken,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Admin authentication service
pub struct AuthService {
    admin_password: String,
    jwt_settings: JwtSettings,
}

impl AuthService {
    /// Create a new AuthService
    pub fn new(admin_password: String, jwt_settings: JwtSettings) -> Self {
        Self {
            admin_password,
            jwt_settings,
        }
    }

    /// Exchange the admin password for a signed token.
    pub fn login(&self, password: &str) -> Result<AuthToken, AuthError> {
        if password != self.admin_password {
            return Err(AuthError::InvalidPassword);
        }
        self.issue_token()
    }

    /// Issue a signed, time-limited admin token.
    fn issue_token(&self) -> Result<AuthToken, AuthError> {
        let now = Utc::now();
        let expiry = now + Duration::minutes(self.jwt_settings.token_expiry_minutes);

        let claims = Claims {
            sub: ADMIN_SUBJECT.to_string(),
            exp: expiry.timestamp(),
            iat: now.timestamp(),
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_settings.secret.as_bytes()),
        )
        .map_err(|e| AuthError::Internal(format!("Token generation failed: {}", e)))?;

        Ok(AuthToken {
            token,
            expires_in: self.jwt_settings.token_expiry_minutes * 60,
        })
    }

    /// Decode and validate an admin token.
    pub fn validate_token(&self, token: &str) -> Result<Claims, AuthError> {
        decode_admin_token(token, &self.jwt_settings.secret)
    }
}

/// Decode and validate an admin token against the signing secret.
///
/// Shared with the auth middleware, which holds settings rather than a
/// service instance.
pub fn decode_admin_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken,
    })?;

    if token_data.claims.sub != ADMIN_SUBJECT {
        return Err(AuthError::InvalidToken);
    }

    Ok(token_data.claims)
}
