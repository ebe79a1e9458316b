//! Coordinator-scoped event/workshop list.

use yugam_client::PortalClient;
use yugam_core::types::ListFilter;
use yugam_entity::{Event, Workshop};

use crate::context::RequestContext;
use crate::listing::{Scope, EVENTS_FAILED, WORKSHOPS_FAILED};
use crate::view::{filter, ItemRow, ListView, Toasts};

#[derive(Debug, Clone)]
pub struct CoordinatorService {
    client: PortalClient,
}

impl CoordinatorService {
    pub fn new(client: PortalClient) -> Self {
        Self { client }
    }

    /// Events and workshops coordinated by the user, merged into one table
    /// (events first) and narrowed by `list_filter`.
    pub async fn events(&self, ctx: &RequestContext, list_filter: ListFilter) -> ListView<ItemRow> {
        let api = ctx.api(&self.client);
        let mut toasts = Toasts::new();

        let (events, workshops) = tokio::join!(api.events().get_all(), api.workshops().get_all());
        let events = toasts.settle(events, EVENTS_FAILED);
        let workshops = toasts.settle(workshops, WORKSHOPS_FAILED);

        let rows = merge(
            ctx,
            events,
            workshops,
            &list_filter,
        );
        ListView::new(rows, toasts).with_filter(list_filter)
    }
}

fn merge(
    ctx: &RequestContext,
    events: Vec<Event>,
    workshops: Vec<Workshop>,
    list_filter: &ListFilter,
) -> Vec<ItemRow> {
    let scope = Scope::coordinated_by(ctx);
    let events = filter::apply(scope.retain(events), list_filter);
    let workshops = filter::apply(scope.retain(workshops), list_filter);

    events
        .iter()
        .map(ItemRow::from_item)
        .chain(workshops.iter().map(ItemRow::from_item))
        .collect()
}
