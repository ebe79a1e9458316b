//! Shared HTTP plumbing for every wrapper.
//!
//! Paths passed to [`HttpClient`] are segment lists relative to the
//! configured base URL. Each segment is percent-encoded on its own, so an
//! id never adds or climbs path levels. Failures are mapped into
//! [`AppError`]:
//!
//! | Remote outcome | `ErrorKind` |
//! |----------------|-------------|
//! | 401 | `Authentication` |
//! | 403 | `Authorization` |
//! | 404 | `NotFound` |
//! | any other non-2xx | `ExternalService` |
//! | connect / timeout | `ServiceUnavailable` |
//! | undecodable body | `Serialization` |

use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use yugam_core::config::BackendConfig;
use yugam_core::error::{AppError, ErrorKind};
use yugam_core::AppResult;

/// Pooled `reqwest` client bound to the remote base URL and, optionally,
/// a user's bearer token.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpClient {
    /// Build the pooled client.
    pub fn new(config: &BackendConfig) -> AppResult<Self> {
        let inner = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Configuration, "Failed to build HTTP client", e)
            })?;

        Ok(Self {
            inner,
            base_url: config.parsed_base_url()?,
            token: None,
        })
    }

    /// Same pool, different bearer token.
    pub fn authorized(&self, token: &str) -> Self {
        Self {
            inner: self.inner.clone(),
            base_url: self.base_url.clone(),
            token: Some(token.to_string()),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &[&str]) -> AppResult<T> {
        let resp = self.send(Method::GET, path, None::<&()>).await?;
        decode(&endpoint(&Method::GET, path), resp).await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &[&str],
        body: &B,
    ) -> AppResult<T> {
        let resp = self.send(Method::POST, path, Some(body)).await?;
        decode(&endpoint(&Method::POST, path), resp).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &[&str],
        body: &B,
    ) -> AppResult<T> {
        let resp = self.send(Method::PUT, path, Some(body)).await?;
        decode(&endpoint(&Method::PUT, path), resp).await
    }

    /// PUT without a request body; any response body is discarded.
    pub async fn put_empty(&self, path: &[&str]) -> AppResult<()> {
        self.send(Method::PUT, path, None::<&()>).await?;
        Ok(())
    }

    /// DELETE; any response body is discarded.
    pub async fn delete(&self, path: &[&str]) -> AppResult<()> {
        self.send(Method::DELETE, path, None::<&()>).await?;
        Ok(())
    }

    /// Issue the request and turn non-2xx answers into errors.
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &[&str],
        body: Option<&B>,
    ) -> AppResult<reqwest::Response> {
        let endpoint = endpoint(&method, path);
        let url = self.url_for(path)?;

        tracing::debug!(endpoint = %endpoint, "Calling remote API");

        let mut request = self.inner.request(method, url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let resp = request.send().await.map_err(|e| transport_error(&endpoint, e))?;

        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp
            .text()
            .await
            .unwrap_or_else(|e| format!("<failed to read response body: {e}>"));
        Err(status_error(&endpoint, status, &body))
    }
}

impl HttpClient {
    /// Resolve `path` under the base URL, one encoded segment per entry.
    ///
    /// Empty, `.` and `..` segments name no record and are rejected.
    pub fn url_for(&self, path: &[&str]) -> AppResult<Url> {
        if let Some(bad) = path
            .iter()
            .find(|segment| matches!(segment.trim(), "" | "." | ".."))
        {
            return Err(AppError::not_found(format!(
                "No remote record at path segment {bad:?}"
            )));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| AppError::configuration("backend.base_url cannot carry a path"))?
            .pop_if_empty()
            .extend(path);
        Ok(url)
    }
}

fn endpoint(method: &Method, path: &[&str]) -> String {
    format!("{method} /{}", path.join("/"))
}

async fn decode<T: DeserializeOwned>(endpoint: &str, resp: reqwest::Response) -> AppResult<T> {
    let bytes = resp.bytes().await.map_err(|e| transport_error(endpoint, e))?;
    serde_json::from_slice(&bytes).map_err(|e| {
        AppError::with_source(
            ErrorKind::Serialization,
            format!("{endpoint}: unexpected response body: {e}"),
            e,
        )
    })
}

fn transport_error(endpoint: &str, err: reqwest::Error) -> AppError {
    let kind = if err.is_timeout() || err.is_connect() || err.is_request() {
        ErrorKind::ServiceUnavailable
    } else {
        ErrorKind::ExternalService
    };
    AppError::with_source(kind, format!("{endpoint}: remote API unreachable"), err)
}

/// Map a non-2xx answer to an error, preferring the remote `message` field.
pub(crate) fn status_error(endpoint: &str, status: StatusCode, body: &str) -> AppError {
    let detail = remote_message(body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .unwrap_or("request failed")
            .to_string()
    });

    let kind = match status {
        StatusCode::UNAUTHORIZED => ErrorKind::Authentication,
        StatusCode::FORBIDDEN => ErrorKind::Authorization,
        StatusCode::NOT_FOUND => ErrorKind::NotFound,
        _ => ErrorKind::ExternalService,
    };

    AppError::new(
        kind,
        format!("{endpoint} returned {}: {detail}", status.as_u16()),
    )
}

fn remote_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .or_else(|| value.get("error"))
        .and_then(|m| m.as_str())
        .map(str::to_string)
}
