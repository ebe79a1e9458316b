//! `/expenses` wrapper.

use yugam_core::AppResult;
use yugam_entity::expense::{CreateExpenseRequest, UpdateExpenseRequest};
use yugam_entity::Expense;

use crate::http::HttpClient;

#[derive(Debug, Clone, Copy)]
pub struct ExpensesApi<'a> {
    http: &'a HttpClient,
}

impl<'a> ExpensesApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn get_all(self) -> AppResult<Vec<Expense>> {
        self.http.get(&["expenses"]).await
    }

    pub async fn get_by_id(self, id: &str) -> AppResult<Expense> {
        self.http.get(&["expenses", id]).await
    }

    pub async fn create(self, req: &CreateExpenseRequest) -> AppResult<Expense> {
        self.http.post(&["expenses"], req).await
    }

    pub async fn update(self, id: &str, req: &UpdateExpenseRequest) -> AppResult<Expense> {
        self.http.put(&["expenses", id], req).await
    }

    pub async fn delete(self, id: &str) -> AppResult<()> {
        self.http.delete(&["expenses", id]).await
    }

    pub async fn get_by_event(self, event_id: &str) -> AppResult<Vec<Expense>> {
        self.http.get(&["expenses", "event", event_id]).await
    }

    pub async fn get_by_workshop(self, workshop_id: &str) -> AppResult<Vec<Expense>> {
        self.http
            .get(&["expenses", "workshop", workshop_id])
            .await
    }
}
