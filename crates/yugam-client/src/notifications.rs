//! `/notifications` wrapper.

use yugam_core::AppResult;
use yugam_entity::Notification;

use crate::http::HttpClient;

#[derive(Debug, Clone, Copy)]
pub struct NotificationsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> NotificationsApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn get_all(self) -> AppResult<Vec<Notification>> {
        self.http.get(&["notifications"]).await
    }

    /// `PUT /notifications/{id}/read`
    pub async fn mark_read(self, id: &str) -> AppResult<()> {
        self.http.put_empty(&["notifications", id, "read"]).await
    }
}
