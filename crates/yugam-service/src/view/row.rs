//! Table rows.

use chrono::{DateTime, Utc};
use serde::Serialize;

use yugam_entity::{ApprovalStatus, Budget, ItemKind, ProgramItem, UserRef};

use super::badge::StatusBadge;

/// One event or workshop in a table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRow {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub title: String,
    pub description: Option<String>,
    pub creator: UserRef,
    pub coordinator: Option<UserRef>,
    pub status: ApprovalStatus,
    pub badge: StatusBadge,
    pub venue: Option<String>,
    pub date_time: Option<DateTime<Utc>>,
    /// `YYYY-MM-DD`, or `TBD` when unscheduled.
    pub date: String,
    /// Detail page of the item.
    pub link: String,
}

impl ItemRow {
    pub fn from_item<T: ProgramItem>(item: &T) -> Self {
        let kind = item.kind();
        Self {
            id: item.id().to_string(),
            kind,
            title: item.title().to_string(),
            description: item.description().map(str::to_string),
            creator: item.creator().clone(),
            coordinator: item.coordinator().cloned(),
            status: item.status(),
            badge: StatusBadge::for_row(item.status(), item.id()),
            venue: item.venue().map(str::to_string),
            date_time: item.date_time(),
            date: item
                .date_time()
                .map(|dt| dt.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "TBD".to_string()),
            link: format!("/{}/{}", kind.path_segment(), item.id()),
        }
    }
}

/// One budget in a table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRow {
    #[serde(flatten)]
    pub budget: Budget,
    pub category_name: String,
    /// Approved amount, or the requested amount while unreviewed.
    pub effective_approved: f64,
    pub badge: Option<StatusBadge>,
}

impl From<Budget> for BudgetRow {
    fn from(budget: Budget) -> Self {
        Self {
            category_name: budget.category_name().to_string(),
            effective_approved: budget.effective_approved(),
            badge: budget
                .status
                .map(|status| StatusBadge::for_row(status, &budget.id)),
            budget,
        }
    }
}
