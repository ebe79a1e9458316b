//! `/budgets` wrapper.

use yugam_core::AppResult;
use yugam_entity::budget::{CreateBudgetRequest, UpdateBudgetRequest};
use yugam_entity::{ApprovalDecision, Budget};

use crate::http::HttpClient;

#[derive(Debug, Clone, Copy)]
pub struct BudgetsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> BudgetsApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn get_all(self) -> AppResult<Vec<Budget>> {
        self.http.get(&["budgets"]).await
    }

    pub async fn get_by_id(self, id: &str) -> AppResult<Budget> {
        self.http.get(&["budgets", id]).await
    }

    pub async fn create(self, req: &CreateBudgetRequest) -> AppResult<Budget> {
        self.http.post(&["budgets"], req).await
    }

    pub async fn update(self, id: &str, req: &UpdateBudgetRequest) -> AppResult<Budget> {
        self.http.put(&["budgets", id], req).await
    }

    pub async fn delete(self, id: &str) -> AppResult<()> {
        self.http.delete(&["budgets", id]).await
    }

    pub async fn approve(
        &self,
        id: &str,
        decision: &ApprovalDecision,
    ) -> AppResult<serde_json::Value> {
        self.http
            .post(&["budgets", id, "approve"], decision)
            .await
    }

    pub async fn get_by_event(self, event_id: &str) -> AppResult<Vec<Budget>> {
        self.http.get(&["budgets", "event", event_id]).await
    }

    pub async fn get_by_workshop(self, workshop_id: &str) -> AppResult<Vec<Budget>> {
        self.http
            .get(&["budgets", "workshop", workshop_id])
            .await
    }
}
