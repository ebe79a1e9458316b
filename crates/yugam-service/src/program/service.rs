//! Create and approve actions. Unlike page loads, these propagate remote
//! failures to the caller.

use serde::Serialize;
use tracing::info;

use yugam_client::PortalClient;
use yugam_core::AppResult;
use yugam_entity::event::CreateEventRequest;
use yugam_entity::workshop::CreateWorkshopRequest;
use yugam_entity::{ApprovalDecision, Event, Venue, Workshop};

use crate::context::RequestContext;
use crate::listing::VENUES_FAILED;
use crate::view::{Toast, Toasts};

/// What an approval decision is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalTarget {
    Event,
    Workshop,
    Budget,
}

impl ApprovalTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Workshop => "workshop",
            Self::Budget => "budget",
        }
    }
}

/// Metadata for a create form.
#[derive(Debug, Clone, Serialize)]
pub struct CreateFormView {
    pub venues: Vec<Venue>,
    pub toasts: Vec<Toast>,
}

#[derive(Debug, Clone)]
pub struct ProgramService {
    client: PortalClient,
}

impl ProgramService {
    pub fn new(client: PortalClient) -> Self {
        Self { client }
    }

    /// Venue choices for the create forms.
    pub async fn create_form(&self, ctx: &RequestContext) -> CreateFormView {
        let mut toasts = Toasts::new();
        let venues = toasts.settle(
            ctx.api(&self.client).venues().get_all().await,
            VENUES_FAILED,
        );
        CreateFormView {
            venues,
            toasts: toasts.into_vec(),
        }
    }

    pub async fn create_event(
        &self,
        ctx: &RequestContext,
        req: &CreateEventRequest,
    ) -> AppResult<Event> {
        let event = ctx.api(&self.client).events().create(req).await?;
        info!(user_id = %ctx.user_id, event_id = %event.id, "Event created");
        Ok(event)
    }

    pub async fn create_workshop(
        &self,
        ctx: &RequestContext,
        req: &CreateWorkshopRequest,
    ) -> AppResult<Workshop> {
        let workshop = ctx.api(&self.client).workshops().create(req).await?;
        info!(user_id = %ctx.user_id, workshop_id = %workshop.id, "Workshop created");
        Ok(workshop)
    }

    /// Forward an approve/reject decision.
    pub async fn approve(
        &self,
        ctx: &RequestContext,
        target: ApprovalTarget,
        id: &str,
        decision: &ApprovalDecision,
    ) -> AppResult<serde_json::Value> {
        let api = ctx.api(&self.client);
        let resp = match target {
            ApprovalTarget::Event => api.events().approve(id, decision).await?,
            ApprovalTarget::Workshop => api.workshops().approve(id, decision).await?,
            ApprovalTarget::Budget => api.budgets().approve(id, decision).await?,
        };
        info!(
            user_id = %ctx.user_id,
            target = target.as_str(),
            id = %id,
            status = %decision.status,
            "Approval decision forwarded"
        );
        Ok(resp)
    }
}
