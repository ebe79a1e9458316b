//! Per-item financial report.

use serde::Serialize;

use yugam_client::PortalClient;
use yugam_entity::{ApprovalStatus, ItemKind, ProgramItem};

use super::snapshot::{Needs, Snapshot};
use crate::context::RequestContext;
use crate::listing::Scope;
use crate::view::{BudgetSummary, StatusBadge, Toast, Toasts};

/// One line of the report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemReport {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub title: String,
    pub status: ApprovalStatus,
    pub badge: StatusBadge,
    pub link: String,
    pub summary: BudgetSummary,
}

impl ItemReport {
    fn build<T: ProgramItem>(item: &T, snapshot: &Snapshot) -> Self {
        let (budgets, expenses) = snapshot.financials_of(item);
        Self {
            id: item.id().to_string(),
            kind: item.kind(),
            title: item.title().to_string(),
            status: item.status(),
            badge: StatusBadge::for_row(item.status(), item.id()),
            link: format!("/{}/{}", item.kind().path_segment(), item.id()),
            summary: BudgetSummary::compute(&budgets, &expenses),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    pub rows: Vec<ItemReport>,
    pub totals: BudgetSummary,
    pub toasts: Vec<Toast>,
}

impl ReportView {
    pub fn from_snapshot(snapshot: &Snapshot, toasts: Toasts) -> Self {
        let rows = snapshot
            .events
            .iter()
            .map(|e| ItemReport::build(e, snapshot))
            .chain(
                snapshot
                    .workshops
                    .iter()
                    .map(|w| ItemReport::build(w, snapshot)),
            )
            .collect();
        Self {
            rows,
            totals: snapshot.summary(),
            toasts: toasts.into_vec(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportService {
    client: PortalClient,
}

impl ReportService {
    pub fn new(client: PortalClient) -> Self {
        Self { client }
    }

    /// Financial report over the items admitted by `scope`.
    pub async fn report(&self, ctx: &RequestContext, scope: &Scope) -> ReportView {
        let api = ctx.api(&self.client);
        let mut toasts = Toasts::new();
        let snapshot = Snapshot::load(&api, Needs::ALL, &mut toasts)
            .await
            .scoped(scope);
        ReportView::from_snapshot(&snapshot, toasts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yugam_entity::{Budget, Event, Expense};

    #[test]
    fn test_report_rows_carry_item_totals() {
        let events: Vec<Event> = serde_json::from_value(serde_json::json!([
            { "id": "e-1", "title": "Expo", "status": "APPROVED", "creator": { "id": "l" } }
        ]))
        .unwrap();
        let budgets: Vec<Budget> = serde_json::from_value(serde_json::json!([
            { "id": "b-1", "amount": 1000.0, "approvedAmount": 1000.0, "eventId": "e-1" }
        ]))
        .unwrap();
        let expenses: Vec<Expense> = serde_json::from_value(serde_json::json!([
            { "id": "x-1", "item": "Stage", "amount": 950.0, "eventId": "e-1" }
        ]))
        .unwrap();
        let snapshot = Snapshot {
            events,
            budgets,
            expenses,
            ..Default::default()
        };

        let view = ReportView::from_snapshot(&snapshot, Toasts::new());
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].summary.utilization, 95);
        assert_eq!(view.rows[0].link, "/events/e-1");
        assert_eq!(view.totals.remaining, 50.0);
    }
}
