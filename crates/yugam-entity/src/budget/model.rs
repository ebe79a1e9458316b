//! Budget allocations requested for an event or workshop.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::status::ApprovalStatus;

/// Stub reference to a budget/expense category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A requested (and possibly approved) monetary allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub id: String,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    /// Requested amount.
    pub amount: f64,
    /// Amount approved by finance; absent until reviewed.
    #[serde(default)]
    pub approved_amount: Option<f64>,
    #[serde(default)]
    pub sponsor_contribution: f64,
    #[serde(default)]
    pub status: Option<ApprovalStatus>,
    #[serde(default)]
    pub remarks: Option<String>,
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(default)]
    pub workshop_id: Option<String>,
    #[serde(default, deserialize_with = "crate::timestamp::lenient")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Budget {
    /// The approved amount, falling back to the requested amount when the
    /// budget has not been reviewed yet.
    ///
    /// Only an absent `approvedAmount` falls back. An explicit `0` is a
    /// reviewed budget approved for nothing and stays `0`, unlike a
    /// truthiness check that would count it at the requested amount.
    pub fn effective_approved(&self) -> f64 {
        self.approved_amount.unwrap_or(self.amount)
    }

    /// Category name or a placeholder.
    pub fn category_name(&self) -> &str {
        self.category
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or("Uncategorized")
    }
}

/// Body of `POST /budgets`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBudgetRequest {
    pub category_id: String,
    pub amount: f64,
    #[serde(default)]
    pub sponsor_contribution: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workshop_id: Option<String>,
}

/// Body of `PUT /budgets/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBudgetRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sponsor_contribution: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_approved_falls_back_to_requested() {
        let budget: Budget = serde_json::from_value(serde_json::json!({
            "id": "b1",
            "category": { "id": "c1", "name": "Food" },
            "amount": 1000.0
        }))
        .unwrap();
        assert_eq!(budget.effective_approved(), 1000.0);
        assert_eq!(budget.sponsor_contribution, 0.0);
        assert_eq!(budget.category_name(), "Food");
    }

    #[test]
    fn test_explicit_zero_approval_is_kept() {
        let budget: Budget = serde_json::from_value(serde_json::json!({
            "id": "b2",
            "amount": 500.0,
            "approvedAmount": 0.0
        }))
        .unwrap();
        assert_eq!(budget.effective_approved(), 0.0);
        assert_eq!(budget.category_name(), "Uncategorized");
    }
}
