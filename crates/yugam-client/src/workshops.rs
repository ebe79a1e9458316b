//! `/workshops` wrapper.

use yugam_core::AppResult;
use yugam_entity::workshop::{CreateWorkshopRequest, UpdateWorkshopRequest};
use yugam_entity::{ApprovalDecision, Workshop};

use crate::http::HttpClient;

#[derive(Debug, Clone, Copy)]
pub struct WorkshopsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> WorkshopsApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn get_all(self) -> AppResult<Vec<Workshop>> {
        self.http.get(&["workshops"]).await
    }

    pub async fn get_by_id(self, id: &str) -> AppResult<Workshop> {
        self.http.get(&["workshops", id]).await
    }

    pub async fn create(self, req: &CreateWorkshopRequest) -> AppResult<Workshop> {
        self.http.post(&["workshops"], req).await
    }

    pub async fn update(self, id: &str, req: &UpdateWorkshopRequest) -> AppResult<Workshop> {
        self.http.put(&["workshops", id], req).await
    }

    pub async fn delete(self, id: &str) -> AppResult<()> {
        self.http.delete(&["workshops", id]).await
    }

    /// `POST /workshops/{id}/approve`. The remote answer is passed through
    /// untyped.
    pub async fn approve(
        &self,
        id: &str,
        decision: &ApprovalDecision,
    ) -> AppResult<serde_json::Value> {
        self.http
            .post(&["workshops", id, "approve"], decision)
            .await
    }
}
