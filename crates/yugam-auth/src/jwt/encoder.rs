//! Session token creation.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use yugam_core::config::AuthConfig;
use yugam_core::error::AppError;
use yugam_entity::User;

use super::claims::SessionClaims;

/// Signs session tokens with HS256.
#[derive(Clone)]
pub struct SessionEncoder {
    encoding_key: EncodingKey,
    ttl_minutes: i64,
}

impl std::fmt::Debug for SessionEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionEncoder")
            .field("ttl_minutes", &self.ttl_minutes)
            .finish()
    }
}

/// A freshly signed session token.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedSession {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub claims: SessionClaims,
}

impl SessionEncoder {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.session_secret.as_bytes()),
            ttl_minutes: config.session_ttl_minutes as i64,
        }
    }

    /// Sign a session for `user`, embedding the remote API token.
    pub fn issue(&self, user: &User, api_token: &str) -> Result<IssuedSession, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::minutes(self.ttl_minutes);

        let claims = SessionClaims {
            sub: user.id.clone(),
            role: user.role,
            name: user.name.clone(),
            email: user.email.clone(),
            api_token: api_token.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode session token: {e}")))?;

        Ok(IssuedSession {
            token,
            expires_at,
            claims,
        })
    }
}
