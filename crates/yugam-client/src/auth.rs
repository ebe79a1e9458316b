//! Remote authentication endpoints.

use serde::{Deserialize, Serialize};

use yugam_core::AppResult;
use yugam_entity::User;

use crate::http::HttpClient;

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login: the remote bearer token and the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    http: &'a HttpClient,
}

impl<'a> AuthApi<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// `POST /auth/login`
    pub async fn login(self, req: &LoginRequest) -> AppResult<LoginResponse> {
        self.http.post(&["auth", "login"], req).await
    }

    /// `GET /auth/me`; needs a token.
    pub async fn me(self) -> AppResult<User> {
        self.http.get(&["auth", "me"]).await
    }
}
