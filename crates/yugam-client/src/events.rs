//! `/events` wrapper.

use yugam_core::AppResult;
use yugam_entity::event::{CreateEventRequest, UpdateEventRequest};
use yugam_entity::{ApprovalDecision, Event};

use crate::http::HttpClient;

#[derive(Debug, Clone, Copy)]
pub struct EventsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> EventsApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn get_all(self) -> AppResult<Vec<Event>> {
        self.http.get(&["events"]).await
    }

    pub async fn get_by_id(self, id: &str) -> AppResult<Event> {
        self.http.get(&["events", id]).await
    }

    pub async fn create(self, req: &CreateEventRequest) -> AppResult<Event> {
        self.http.post(&["events"], req).await
    }

    pub async fn update(self, id: &str, req: &UpdateEventRequest) -> AppResult<Event> {
        self.http.put(&["events", id], req).await
    }

    pub async fn delete(self, id: &str) -> AppResult<()> {
        self.http.delete(&["events", id]).await
    }

    /// `POST /events/{id}/approve`. The remote answer is passed through
    /// untyped.
    pub async fn approve(
        &self,
        id: &str,
        decision: &ApprovalDecision,
    ) -> AppResult<serde_json::Value> {
        self.http
            .post(&["events", id, "approve"], decision)
            .await
    }
}
