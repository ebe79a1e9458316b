//! Everything a report or dashboard needs, fetched in one concurrent round.

use std::collections::HashSet;
use std::future::Future;

use serde::Serialize;

use yugam_client::PortalClient;
use yugam_core::AppResult;
use yugam_entity::{ApprovalStatus, Budget, Event, Expense, ItemKind, ProgramItem, Workshop};

use crate::listing::{
    Scope, BUDGETS_FAILED, EVENTS_FAILED, EXPENSES_FAILED, WORKSHOPS_FAILED,
};
use crate::view::{BudgetSummary, ItemRow, Toasts};

/// Which collections to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Needs {
    pub events: bool,
    pub workshops: bool,
    pub budgets: bool,
    pub expenses: bool,
}

impl Needs {
    pub const ALL: Needs = Needs {
        events: true,
        workshops: true,
        budgets: true,
        expenses: true,
    };

    /// Items of `kinds` plus all budgets and expenses.
    pub fn kinds(kinds: &[ItemKind]) -> Self {
        Self {
            events: kinds.contains(&ItemKind::Event),
            workshops: kinds.contains(&ItemKind::Workshop),
            budgets: true,
            expenses: true,
        }
    }
}

/// Per-status item counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    pub rejected: usize,
    pub completed: usize,
    pub unknown: usize,
}

impl StatusCounts {
    fn add(&mut self, status: ApprovalStatus) {
        self.total += 1;
        match status {
            ApprovalStatus::Pending => self.pending += 1,
            ApprovalStatus::Approved => self.approved += 1,
            ApprovalStatus::Rejected => self.rejected += 1,
            ApprovalStatus::Completed => self.completed += 1,
            ApprovalStatus::Unknown => self.unknown += 1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub events: Vec<Event>,
    pub workshops: Vec<Workshop>,
    pub budgets: Vec<Budget>,
    pub expenses: Vec<Expense>,
}

impl Snapshot {
    /// Fetch the needed collections concurrently. Failures become toasts.
    pub async fn load(api: &PortalClient, needs: Needs, toasts: &mut Toasts) -> Self {
        let (events, workshops, budgets, expenses) = tokio::join!(
            fetch_if(needs.events, api.events().get_all()),
            fetch_if(needs.workshops, api.workshops().get_all()),
            fetch_if(needs.budgets, api.budgets().get_all()),
            fetch_if(needs.expenses, api.expenses().get_all()),
        );

        Self {
            events: toasts.settle(events, EVENTS_FAILED),
            workshops: toasts.settle(workshops, WORKSHOPS_FAILED),
            budgets: toasts.settle(budgets, BUDGETS_FAILED),
            expenses: toasts.settle(expenses, EXPENSES_FAILED),
        }
    }

    /// Keep the items admitted by `scope` and the budgets and expenses
    /// attached to them.
    pub fn scoped(self, scope: &Scope) -> Self {
        let events = scope.retain(self.events);
        let workshops = scope.retain(self.workshops);

        let event_ids: HashSet<&str> = events.iter().map(|e| e.id.as_str()).collect();
        let workshop_ids: HashSet<&str> = workshops.iter().map(|w| w.id.as_str()).collect();
        let attached = |event_id: &Option<String>, workshop_id: &Option<String>| {
            event_id
                .as_deref()
                .is_some_and(|id| event_ids.contains(id))
                || workshop_id
                    .as_deref()
                    .is_some_and(|id| workshop_ids.contains(id))
        };

        let budgets = self
            .budgets
            .into_iter()
            .filter(|b| attached(&b.event_id, &b.workshop_id))
            .collect();
        let expenses = self
            .expenses
            .into_iter()
            .filter(|e| attached(&e.event_id, &e.workshop_id))
            .collect();

        Self {
            events,
            workshops,
            budgets,
            expenses,
        }
    }

    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary::compute(&self.budgets, &self.expenses)
    }

    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for status in self
            .events
            .iter()
            .map(|e| e.status)
            .chain(self.workshops.iter().map(|w| w.status))
        {
            counts.add(status);
        }
        counts
    }

    pub fn pending_budgets(&self) -> usize {
        self.budgets
            .iter()
            .filter(|b| b.status == Some(ApprovalStatus::Pending))
            .count()
    }

    /// Budgets and expenses of one item.
    pub fn financials_of<T: ProgramItem>(&self, item: &T) -> (Vec<Budget>, Vec<Expense>) {
        let owner = |event_id: &Option<String>, workshop_id: &Option<String>| {
            let id = match item.kind() {
                ItemKind::Event => event_id,
                ItemKind::Workshop => workshop_id,
            };
            id.as_deref() == Some(item.id())
        };
        let budgets = self
            .budgets
            .iter()
            .filter(|b| owner(&b.event_id, &b.workshop_id))
            .cloned()
            .collect();
        let expenses = self
            .expenses
            .iter()
            .filter(|e| owner(&e.event_id, &e.workshop_id))
            .cloned()
            .collect();
        (budgets, expenses)
    }

    /// Rows for the `limit` most recently created items.
    pub fn recent_rows(&self, limit: usize) -> Vec<ItemRow> {
        let mut rows: Vec<(Option<chrono::DateTime<chrono::Utc>>, ItemRow)> = self
            .events
            .iter()
            .map(|e| (e.created_at, ItemRow::from_item(e)))
            .chain(
                self.workshops
                    .iter()
                    .map(|w| (w.created_at, ItemRow::from_item(w))),
            )
            .collect();
        rows.sort_by(|a, b| b.0.cmp(&a.0));
        rows.into_iter().take(limit).map(|(_, row)| row).collect()
    }
}

async fn fetch_if<T, F>(needed: bool, fetch: F) -> AppResult<Vec<T>>
where
    F: Future<Output = AppResult<Vec<T>>>,
{
    if needed {
        fetch.await
    } else {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Snapshot {
        let events: Vec<Event> = serde_json::from_value(serde_json::json!([
            { "id": "e-1", "title": "Expo", "status": "APPROVED",
              "creator": { "id": "lead" }, "coordinator": { "id": "c-1" },
              "createdAt": "2024-11-01T00:00:00Z" },
            { "id": "e-2", "title": "Quiz", "status": "PENDING",
              "creator": { "id": "other" },
              "createdAt": "2024-11-03T00:00:00Z" }
        ]))
        .unwrap();
        let workshops: Vec<Workshop> = serde_json::from_value(serde_json::json!([
            { "id": "w-1", "title": "Rust", "status": "COMPLETED",
              "creator": { "id": "lead" }, "coordinator": { "id": "c-1" },
              "createdAt": "2024-11-02T00:00:00Z" }
        ]))
        .unwrap();
        let budgets: Vec<Budget> = serde_json::from_value(serde_json::json!([
            { "id": "b-1", "amount": 1000.0, "eventId": "e-1", "status": "PENDING" },
            { "id": "b-2", "amount": 2000.0, "approvedAmount": 1800.0, "workshopId": "w-1" },
            { "id": "b-3", "amount": 400.0, "eventId": "e-2" }
        ]))
        .unwrap();
        let expenses: Vec<Expense> = serde_json::from_value(serde_json::json!([
            { "id": "x-1", "item": "Banner", "amount": 500.0, "eventId": "e-1" },
            { "id": "x-2", "item": "Laptops", "amount": 700.0, "workshopId": "w-1" },
            { "id": "x-3", "item": "Prizes", "amount": 300.0, "eventId": "e-2" }
        ]))
        .unwrap();
        Snapshot {
            events,
            workshops,
            budgets,
            expenses,
        }
    }

    #[test]
    fn test_coordinator_scope_keeps_attached_financials() {
        let scoped = snapshot().scoped(&Scope::CoordinatedBy("c-1".into()));
        assert_eq!(scoped.events.len(), 1);
        assert_eq!(scoped.workshops.len(), 1);

        let summary = scoped.summary();
        assert_eq!(summary.total_budget, 3000.0);
        assert_eq!(summary.total_approved, 2800.0);
        assert_eq!(summary.total_expenses, 1200.0);
        assert_eq!(summary.utilization, 42);
    }

    #[test]
    fn test_status_counts_and_pending_budgets() {
        let snap = snapshot();
        let counts = snap.status_counts();
        assert_eq!(counts.total, 3);
        assert_eq!(counts.approved, 1);
        assert_eq!(counts.pending, 1);
        assert_eq!(counts.completed, 1);
        assert_eq!(snap.pending_budgets(), 1);
    }

    #[test]
    fn test_financials_of_item() {
        let snap = snapshot();
        let (budgets, expenses) = snap.financials_of(&snap.workshops[0]);
        assert_eq!(budgets.len(), 1);
        assert_eq!(expenses.len(), 1);
        assert_eq!(budgets[0].id, "b-2");
    }

    #[test]
    fn test_recent_rows_newest_first() {
        let rows = snapshot().recent_rows(2);
        let ids: Vec<_> = rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["e-2", "w-1"]);
    }
}
