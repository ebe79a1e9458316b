//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use http::header::{HeaderMap, LOCATION};
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use yugam_api::AppState;
use yugam_auth::SessionEncoder;
use yugam_core::config::AppConfig;
use yugam_entity::{Role, User};

/// Remote bearer token embedded in every test session.
pub const REMOTE_TOKEN: &str = "remote-token";

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Stand-in for the remote Yugam API
    pub remote: MockServer,
    /// Application config
    pub config: AppConfig,
    encoder: SessionEncoder,
}

impl TestApp {
    /// Create a new test application pointed at a fresh mock server
    pub async fn new() -> Self {
        let remote = MockServer::start().await;

        let mut config = AppConfig::default();
        config.backend.base_url = format!("{}/api", remote.uri());
        config.backend.timeout_seconds = 5;
        config.auth.session_secret = "integration-test-secret-0123456789".to_string();

        let state = AppState::new(config.clone()).expect("Failed to build app state");
        let router = yugam_api::build_app(state);
        let encoder = SessionEncoder::new(&config.auth);

        Self {
            router,
            remote,
            config,
            encoder,
        }
    }

    /// A signed session token for a user with `role`.
    pub fn session_for(&self, user_id: &str, role: Role) -> String {
        let user = User {
            id: user_id.to_string(),
            name: format!("{} user", role.label()),
            email: format!("{user_id}@yugam.in"),
            role,
            created_at: None,
        };
        self.encoder
            .issue(&user, REMOTE_TOKEN)
            .expect("Failed to issue session")
            .token
    }

    /// Mount a `GET /api{remote_path}` mock answering `body`.
    pub async fn mock_get(&self, remote_path: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/api{remote_path}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.remote)
            .await;
    }

    /// Make a request, authenticating with a bearer session token
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let auth = token.map(|t| ("Authorization", format!("Bearer {}", t)));
        self.send(method, path, body, auth).await
    }

    /// Make a request carrying the session cookie instead of a header
    pub async fn request_with_cookie(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: &str,
    ) -> TestResponse {
        let cookie = format!("{}={}", self.config.auth.cookie_name, token);
        self.send(method, path, body, Some(("Cookie", cookie))).await
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        header: Option<(&str, String)>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);

        if let Some((name, value)) = header {
            req = req.header(name, value);
        }

        let body = match body {
            Some(b) => {
                req = req.header("Content-Type", "application/json");
                Body::from(serde_json::to_string(&b).expect("Failed to serialize body"))
            }
            None => Body::empty(),
        };

        let req = req.body(body).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let headers = response.headers().clone();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let text = String::from_utf8_lossy(&body_bytes).into_owned();
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            headers,
            body,
            text,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Response headers
    pub headers: HeaderMap,
    /// Parsed JSON body (`Null` when the body is not JSON)
    pub body: Value,
    /// Raw body
    pub text: String,
}

impl TestResponse {
    /// The redirect target, if any.
    pub fn location(&self) -> Option<&str> {
        self.headers.get(LOCATION).and_then(|v| v.to_str().ok())
    }

    /// Every `Set-Cookie` header value.
    pub fn set_cookies(&self) -> Vec<String> {
        self.headers
            .get_all("set-cookie")
            .iter()
            .filter_map(|v| v.to_str().ok().map(String::from))
            .collect()
    }

    /// `data.rows` of a list page.
    pub fn rows(&self) -> &Vec<Value> {
        self.body["data"]["rows"]
            .as_array()
            .expect("Response has no data.rows")
    }
}
