//! `/logs` wrapper.

use yugam_core::AppResult;
use yugam_entity::AuditLogEntry;

use crate::http::HttpClient;

#[derive(Debug, Clone, Copy)]
pub struct LogsApi<'a> {
    http: &'a HttpClient,
}

impl<'a> LogsApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn get_all(self) -> AppResult<Vec<AuditLogEntry>> {
        self.http.get(&["logs"]).await
    }
}
