//! Event records and their create/update payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::budget::Budget;
use crate::expense::Expense;
use crate::item::{ItemKind, ProgramItem};
use crate::status::ApprovalStatus;
use crate::user::UserRef;

/// An event as returned by `GET /events`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
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
    pub expenses: Option<Vec<Expense>>,
    #[serde(default, rename = "_count")]
    pub count: Option<RecordCount>,
}

/// Related-record counters attached by the remote API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordCount {
    #[serde(default)]
    pub expenses: u32,
}

impl ProgramItem for Event {
    fn kind(&self) -> ItemKind {
        ItemKind::Event
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

/// Body of `POST /events`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
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

/// Body of `PUT /events/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEventRequest {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_minimal_event() {
        let event: Event = serde_json::from_value(serde_json::json!({
            "id": "evt-1",
            "title": "Hackathon",
            "type": "EVENT",
            "status": "PENDING",
            "creator": { "id": "u1", "name": "Lead", "email": "lead@yugam.in" }
        }))
        .unwrap();
        assert_eq!(event.kind(), ItemKind::Event);
        assert!(event.coordinator.is_none());
        assert!(event.date_time.is_none());
        assert!(event.is_created_by("u1"));
        assert!(!event.is_coordinated_by("u1"));
    }

    #[test]
    fn test_naive_date_time_does_not_sink_the_list() {
        let creator = serde_json::json!({ "id": "u1", "name": "Lead", "email": "lead@yugam.in" });
        let events: Vec<Event> = serde_json::from_value(serde_json::json!([
            { "id": "e-1", "title": "Zoned", "status": "APPROVED", "creator": creator,
              "dateTime": "2024-12-25T10:00:00.000Z" },
            { "id": "e-2", "title": "Naive", "status": "PENDING", "creator": creator,
              "dateTime": "2024-12-25T10:00:00", "createdAt": "2024-12-20T08:30" },
            { "id": "e-3", "title": "Garbled", "status": "PENDING", "creator": creator,
              "dateTime": "soon", "updatedAt": 1703498400 }
        ]))
        .unwrap();

        let christmas = chrono::TimeZone::with_ymd_and_hms(&Utc, 2024, 12, 25, 10, 0, 0).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].date_time, Some(christmas));
        assert_eq!(events[1].date_time, Some(christmas));
        assert!(events[1].created_at.is_some());
        assert!(events[2].date_time.is_none());
        assert!(events[2].updated_at.is_none());
    }

    #[test]
    fn test_update_request_skips_unset_fields() {
        let req = UpdateEventRequest {
            title: Some("Renamed".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "Renamed" }));
    }
}
