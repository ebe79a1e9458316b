//! Detail page: the record, its budgets and expenses, and aggregates.

use serde::Serialize;

use yugam_client::PortalClient;
use yugam_core::AppResult;
use yugam_entity::{Budget, Event, Expense, ItemKind, ProgramItem, Workshop};

use crate::context::RequestContext;
use crate::listing::{BUDGETS_FAILED, EXPENSES_FAILED};
use crate::view::{BudgetRow, BudgetSummary, StatusBadge, Toast, Toasts};

const EVENT_FAILED: &str = "Failed to fetch event details";
const WORKSHOP_FAILED: &str = "Failed to fetch workshop details";

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailView<T> {
    pub kind: ItemKind,
    /// `None` when the record itself could not be fetched.
    pub item: Option<T>,
    pub badge: Option<StatusBadge>,
    pub budgets: Vec<BudgetRow>,
    pub expenses: Vec<Expense>,
    pub summary: BudgetSummary,
    pub toasts: Vec<Toast>,
}

#[derive(Debug, Clone)]
pub struct DetailService {
    client: PortalClient,
}

impl DetailService {
    pub fn new(client: PortalClient) -> Self {
        Self { client }
    }

    pub async fn event(&self, ctx: &RequestContext, id: &str) -> DetailView<Event> {
        let api = ctx.api(&self.client);
        let (event, budgets, expenses) = tokio::join!(
            api.events().get_by_id(id),
            api.budgets().get_by_event(id),
            api.expenses().get_by_event(id),
        );
        assemble(ItemKind::Event, event, budgets, expenses, EVENT_FAILED)
    }

    pub async fn workshop(&self, ctx: &RequestContext, id: &str) -> DetailView<Workshop> {
        let api = ctx.api(&self.client);
        let (workshop, budgets, expenses) = tokio::join!(
            api.workshops().get_by_id(id),
            api.budgets().get_by_workshop(id),
            api.expenses().get_by_workshop(id),
        );
        assemble(ItemKind::Workshop, workshop, budgets, expenses, WORKSHOP_FAILED)
    }
}

fn assemble<T: ProgramItem>(
    kind: ItemKind,
    item: AppResult<T>,
    budgets: AppResult<Vec<Budget>>,
    expenses: AppResult<Vec<Expense>>,
    item_failed: &str,
) -> DetailView<T> {
    let mut toasts = Toasts::new();
    let item = toasts.settle_one(item, item_failed);
    let budgets = toasts.settle(budgets, BUDGETS_FAILED);
    let expenses = toasts.settle(expenses, EXPENSES_FAILED);

    DetailView {
        kind,
        badge: item
            .as_ref()
            .map(|i| StatusBadge::for_row(i.status(), i.id())),
        item,
        summary: BudgetSummary::compute(&budgets, &expenses),
        budgets: budgets.into_iter().map(BudgetRow::from).collect(),
        expenses,
        toasts: toasts.into_vec(),
    }
}
