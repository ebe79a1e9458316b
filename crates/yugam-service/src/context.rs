//! Request context carrying the signed-in user and their remote API token.

use chrono::{DateTime, Utc};
use serde::Serialize;

use yugam_client::PortalClient;
use yugam_entity::{Role, UserRef};

/// Context for the current authenticated request.
///
/// Built by the API layer from the session token and passed into every
/// service method so that each remote call is made on behalf of the user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestContext {
    /// Remote user ID.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Role from the session token.
    pub role: Role,
    /// Remote bearer token.
    #[serde(skip)]
    pub api_token: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    pub fn new(user: UserRef, role: Role, api_token: impl Into<String>) -> Self {
        Self {
            user_id: user.id,
            name: user.name,
            email: user.email,
            role,
            api_token: api_token.into(),
            request_time: Utc::now(),
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// `client` authorized with this user's token.
    pub fn api(&self, client: &PortalClient) -> PortalClient {
        client.with_token(&self.api_token)
    }
}
