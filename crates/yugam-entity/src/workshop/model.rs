//! Workshop records and their create/update payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::budget::Budget;
use crate::event::model::RecordCount;
use crate::expense::Expense;
use crate::item::{ItemKind, ProgramItem};
use crate::status::ApprovalStatus;
use crate::user::UserRef;

/// A workshop as returned by `GET /workshops`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workshop {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: ApprovalStatus,
    #[serde(default)]
    pub expected_participants: Option<u32>,
    #[serde(default)]
    pub venue: Option<String>,
    #[serde(default)]
    pub venue_id: Option<String>,
    #[serde(default, deserialize_with = "crate::timestamp::lenient")]
    pub date_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::timestamp::lenient")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "crate::timestamp::lenient")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub creator_id: Option<String>,
    #[serde(default)]
    pub coordinator_id: Option<String>,
    pub creator: UserRef,
    #[serde(default)]
    pub coordinator: Option<UserRef>,
    #[serde(default)]
    pub budgets: Option<Vec<Budget>>,
    #[serde(default)]
    pub budget_approvals: Option<Vec<serde_json::Value>>,
    #[serde(default)]
    pub expenses: Option<Vec<Expense>>,
    #[serde(default, rename = "_count")]
    pub count: Option<RecordCount>,
}

impl ProgramItem for Workshop {
    fn kind(&self) -> ItemKind {
        ItemKind::Workshop
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    fn status(&self) -> ApprovalStatus {
        self.status
    }

    fn date_time(&self) -> Option<DateTime<Utc>> {
        self.date_time
    }

    fn venue(&self) -> Option<&str> {
        self.venue.as_deref()
    }

    fn creator(&self) -> &UserRef {
        &self.creator
    }

    fn coordinator(&self) -> Option<&UserRef> {
        self.coordinator.as_ref()
    }
}

/// Body of `POST /workshops`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkshopRequest {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_participants: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinator_email: Option<String>,
}

/// Body of `PUT /workshops/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWorkshopRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_participants: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinator_email: Option<String>,
}
