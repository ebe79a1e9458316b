//! Recorded outflows against a budget category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::budget::CategoryRef;
use crate::user::UserRef;

/// A recorded expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: String,
    #[serde(alias = "itemName")]
    pub item: String,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    pub amount: f64,
    #[serde(default)]
    pub submitter: Option<UserRef>,
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(default)]
    pub workshop_id: Option<String>,
    #[serde(default, deserialize_with = "crate::timestamp::lenient")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Expense {
    /// Submitter name or a placeholder.
    pub fn submitter_name(&self) -> &str {
        self.submitter
            .as_ref()
            .map(|u| u.name.as_str())
            .unwrap_or("Unknown")
    }
}

fn default_quantity() -> u32 {
    1
}

/// Body of `POST /expenses`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    pub item: String,
    pub category_id: String,
    pub quantity: u32,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workshop_id: Option<String>,
}

/// Body of `PUT /expenses/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExpenseRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
}
