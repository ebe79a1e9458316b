//! # yugam-client
//!
//! Thin typed wrappers over the remote Yugam API. Each wrapper maps one
//! remote resource to CRUD-shaped calls plus its domain actions, forwards
//! to the shared [`HttpClient`] and hands back the parsed body. Nothing
//! here validates, retries or caches.
//!
//! ```text
//! let client = PortalClient::new(&config.backend)?;
//! let events = client.with_token(&session.api_token).events().get_all().await?;
//! ```

pub mod auth;
pub mod budgets;
pub mod catalog;
pub mod events;
pub mod expenses;
pub mod http;
pub mod logs;
pub mod notifications;
pub mod users;
pub mod workshops;

pub use auth::{AuthApi, LoginRequest, LoginResponse};
pub use budgets::BudgetsApi;
pub use catalog::{CategoriesApi, ProductsApi, VenuesApi};
pub use events::EventsApi;
pub use expenses::ExpensesApi;
pub use http::HttpClient;
pub use logs::LogsApi;
pub use notifications::NotificationsApi;
pub use users::UsersApi;
pub use workshops::WorkshopsApi;

use yugam_core::config::BackendConfig;
use yugam_core::AppResult;

/// Entry point holding the shared connection pool. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct PortalClient {
    http: HttpClient,
}

impl PortalClient {
    /// Build a client from the `backend` configuration section.
    pub fn new(config: &BackendConfig) -> AppResult<Self> {
        Ok(Self {
            http: HttpClient::new(config)?,
        })
    }

    /// A copy of this client that sends `token` as the bearer credential.
    pub fn with_token(&self, token: &str) -> Self {
        Self {
            http: self.http.authorized(token),
        }
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &HttpClient {
        &self.http
    }

    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi::new(&self.http)
    }

    pub fn events(&self) -> EventsApi<'_> {
        EventsApi::new(&self.http)
    }

    pub fn workshops(&self) -> WorkshopsApi<'_> {
        WorkshopsApi::new(&self.http)
    }

    pub fn budgets(&self) -> BudgetsApi<'_> {
        BudgetsApi::new(&self.http)
    }

    pub fn expenses(&self) -> ExpensesApi<'_> {
        ExpensesApi::new(&self.http)
    }

    pub fn venues(&self) -> VenuesApi<'_> {
        VenuesApi::new(&self.http)
    }

    pub fn categories(&self) -> CategoriesApi<'_> {
        CategoriesApi::new(&self.http)
    }

    pub fn products(&self) -> ProductsApi<'_> {
        ProductsApi::new(&self.http)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(&self.http)
    }

    pub fn notifications(&self) -> NotificationsApi<'_> {
        NotificationsApi::new(&self.http)
    }

    pub fn logs(&self) -> LogsApi<'_> {
        LogsApi::new(&self.http)
    }
}
