//! `/users` wrapper (read-only).

use yugam_core::AppResult;
use yugam_entity::User;

use crate::http::HttpClient;

#[derive(Debug, Clone, Copy)]
pub struct UsersApi<'a> {
    http: &'a HttpClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    pub async fn get_all(self) -> AppResult<Vec<User>> {
        self.http.get(&["users"]).await
    }

    pub async fn get_by_id(self, id: &str) -> AppResult<User> {
        self.http.get(&["users", id]).await
    }
}
