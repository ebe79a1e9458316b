//! Table pages: fetch, scope, filter, badge.

use std::collections::HashSet;

use yugam_client::PortalClient;
use yugam_core::types::ListFilter;
use yugam_core::AppResult;
use yugam_entity::{
    AuditLogEntry, Category, Expense, ItemKind, Notification, Product, User, Venue,
};

use super::scope::{LedgerScope, Scope};
use super::{
    BUDGETS_FAILED, CATEGORIES_FAILED, EVENTS_FAILED, EXPENSES_FAILED, LOGS_FAILED,
    NOTIFICATIONS_FAILED, PRODUCTS_FAILED, USERS_FAILED, VENUES_FAILED, WORKSHOPS_FAILED,
};
use crate::context::RequestContext;
use crate::view::{filter, BudgetRow, ItemRow, ListView, Toasts};

/// Builds the list pages.
#[derive(Debug, Clone)]
pub struct ListingService {
    client: PortalClient,
}

impl ListingService {
    pub fn new(client: PortalClient) -> Self {
        Self { client }
    }

    /// Events table.
    pub async fn events(
        &self,
        ctx: &RequestContext,
        scope: &Scope,
        list_filter: ListFilter,
    ) -> ListView<ItemRow> {
        let api = ctx.api(&self.client);
        let mut toasts = Toasts::new();
        let events = toasts.settle(api.events().get_all().await, EVENTS_FAILED);
        let events = filter::apply(scope.retain(events), &list_filter);
        let rows = events.iter().map(ItemRow::from_item).collect();
        ListView::new(rows, toasts).with_filter(list_filter)
    }

    /// Workshops table.
    pub async fn workshops(
        &self,
        ctx: &RequestContext,
        scope: &Scope,
        list_filter: ListFilter,
    ) -> ListView<ItemRow> {
        let api = ctx.api(&self.client);
        let mut toasts = Toasts::new();
        let workshops = toasts.settle(api.workshops().get_all().await, WORKSHOPS_FAILED);
        let workshops = filter::apply(scope.retain(workshops), &list_filter);
        let rows = workshops.iter().map(ItemRow::from_item).collect();
        ListView::new(rows, toasts).with_filter(list_filter)
    }

    /// Budgets table, narrowed to the records `ledger` admits.
    pub async fn budgets(&self, ctx: &RequestContext, ledger: &LedgerScope) -> ListView<BudgetRow> {
        let api = ctx.api(&self.client);
        let mut toasts = Toasts::new();

        let budgets = match ledger {
            LedgerScope::All => toasts.settle(api.budgets().get_all().await, BUDGETS_FAILED),
            LedgerScope::Attached(kind, scope) => {
                let kind = *kind;
                let (ids, budgets) =
                    tokio::join!(scoped_ids(&api, scope, kind), api.budgets().get_all());
                let ids = toasts
                    .settle_one(ids, items_failed(kind))
                    .unwrap_or_default();
                toasts
                    .settle(budgets, BUDGETS_FAILED)
                    .into_iter()
                    .filter(|b| belongs(kind, &b.event_id, &b.workshop_id, &ids))
                    .collect()
            }
        };

        let rows = budgets.into_iter().map(BudgetRow::from).collect();
        ListView::new(rows, toasts)
    }

    /// Expenses table, scoped like [`ListingService::budgets`].
    pub async fn expenses(&self, ctx: &RequestContext, ledger: &LedgerScope) -> ListView<Expense> {
        let api = ctx.api(&self.client);
        let mut toasts = Toasts::new();

        let expenses = match ledger {
            LedgerScope::All => toasts.settle(api.expenses().get_all().await, EXPENSES_FAILED),
            LedgerScope::Attached(kind, scope) => {
                let kind = *kind;
                let (ids, expenses) =
                    tokio::join!(scoped_ids(&api, scope, kind), api.expenses().get_all());
                let ids = toasts
                    .settle_one(ids, items_failed(kind))
                    .unwrap_or_default();
                toasts
                    .settle(expenses, EXPENSES_FAILED)
                    .into_iter()
                    .filter(|e| belongs(kind, &e.event_id, &e.workshop_id, &ids))
                    .collect()
            }
        };

        ListView::new(expenses, toasts)
    }

    pub async fn venues(&self, ctx: &RequestContext) -> ListView<Venue> {
        let result = ctx.api(&self.client).venues().get_all().await;
        simple(result, VENUES_FAILED)
    }

    pub async fn categories(&self, ctx: &RequestContext) -> ListView<Category> {
        let result = ctx.api(&self.client).categories().get_all().await;
        simple(result, CATEGORIES_FAILED)
    }

    pub async fn products(&self, ctx: &RequestContext) -> ListView<Product> {
        let result = ctx.api(&self.client).products().get_all().await;
        simple(result, PRODUCTS_FAILED)
    }

    pub async fn users(&self, ctx: &RequestContext) -> ListView<User> {
        let result = ctx.api(&self.client).users().get_all().await;
        simple(result, USERS_FAILED)
    }

    pub async fn notifications(&self, ctx: &RequestContext) -> ListView<Notification> {
        let result = ctx.api(&self.client).notifications().get_all().await;
        simple(result, NOTIFICATIONS_FAILED)
    }

    pub async fn logs(&self, ctx: &RequestContext) -> ListView<AuditLogEntry> {
        let result = ctx.api(&self.client).logs().get_all().await;
        simple(result, LOGS_FAILED)
    }
}

fn simple<T>(result: AppResult<Vec<T>>, message: &str) -> ListView<T> {
    let mut toasts = Toasts::new();
    let rows = toasts.settle(result, message);
    ListView::new(rows, toasts)
}

pub(crate) fn items_failed(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Event => EVENTS_FAILED,
        ItemKind::Workshop => WORKSHOPS_FAILED,
    }
}

/// IDs of the items of `kind` admitted by `scope`.
async fn scoped_ids(
    api: &PortalClient,
    scope: &Scope,
    kind: ItemKind,
) -> AppResult<HashSet<String>> {
    let ids = match kind {
        ItemKind::Event => scope
            .retain(api.events().get_all().await?)
            .into_iter()
            .map(|e| e.id)
            .collect(),
        ItemKind::Workshop => scope
            .retain(api.workshops().get_all().await?)
            .into_iter()
            .map(|w| w.id)
            .collect(),
    };
    Ok(ids)
}

/// Whether a budget or expense hangs off one of `ids`.
fn belongs(
    kind: ItemKind,
    event_id: &Option<String>,
    workshop_id: &Option<String>,
    ids: &HashSet<String>,
) -> bool {
    let owner = match kind {
        ItemKind::Event => event_id,
        ItemKind::Workshop => workshop_id,
    };
    owner.as_ref().is_some_and(|id| ids.contains(id))
}
