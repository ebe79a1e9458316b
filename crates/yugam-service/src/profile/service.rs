//! Profile page and notification read receipts.

use serde::Serialize;

use yugam_client::PortalClient;
use yugam_core::AppResult;
use yugam_entity::User;

use crate::context::RequestContext;
use crate::view::{Toast, Toasts};

#[derive(Debug, Clone, Serialize)]
pub struct ProfileView {
    /// Who the session says the user is.
    pub session: RequestContext,
    /// The remote account record, when reachable.
    pub account: Option<User>,
    pub toasts: Vec<Toast>,
}

#[derive(Debug, Clone)]
pub struct ProfileService {
    client: PortalClient,
}

impl ProfileService {
    pub fn new(client: PortalClient) -> Self {
        Self { client }
    }

    pub async fn profile(&self, ctx: &RequestContext) -> ProfileView {
        let mut toasts = Toasts::new();
        let account = toasts.settle_one(
            ctx.api(&self.client).auth().me().await,
            "Failed to fetch profile",
        );
        ProfileView {
            session: ctx.clone(),
            account,
            toasts: toasts.into_vec(),
        }
    }

    pub async fn mark_read(&self, ctx: &RequestContext, id: &str) -> AppResult<()> {
        ctx.api(&self.client).notifications().mark_read(id).await?;
        tracing::debug!(user_id = %ctx.user_id, notification_id = %id, "Notification marked read");
        Ok(())
    }
}
