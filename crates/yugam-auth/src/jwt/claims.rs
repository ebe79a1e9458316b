//! Claims carried by the portal session token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use yugam_entity::{Role, UserRef};

/// Session token payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the remote user ID.
    pub sub: String,
    /// Role at login time.
    pub role: Role,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Bearer token issued by the remote API, forwarded on every call.
    pub api_token: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl SessionClaims {
    pub fn user_id(&self) -> &str {
        &self.sub
    }

    /// Stub reference to the session user.
    pub fn user_ref(&self) -> UserRef {
        UserRef {
            id: self.sub.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
        }
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Remaining lifetime in seconds (0 if expired).
    pub fn remaining_ttl_seconds(&self) -> u64 {
        let remaining = self.exp - Utc::now().timestamp();
        if remaining > 0 { remaining as u64 } else { 0 }
    }
}
