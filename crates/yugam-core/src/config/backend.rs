//! Remote Yugam API configuration.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::AppError;

/// Where and how to reach the remote Yugam API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the remote API, e.g. `http://localhost:5000/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// User-Agent sent with every remote call.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl BackendConfig {
    /// Parse `base_url`, normalizing it to end with a slash so that
    /// relative joins keep the path prefix.
    pub fn parsed_base_url(&self) -> Result<Url, AppError> {
        let mut raw = self.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        Ok(Url::parse(&raw)?)
    }
}

fn default_base_url() -> String {
    "http://localhost:5000/api".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("yugam-portal/{}", env!("CARGO_PKG_VERSION"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_trailing_slash() {
        let config = BackendConfig {
            base_url: "http://api.yugam.in/api".to_string(),
            ..BackendConfig::default()
        };
        let url = config.parsed_base_url().unwrap();
        assert_eq!(url.as_str(), "http://api.yugam.in/api/");
        assert_eq!(url.join("workshops").unwrap().path(), "/api/workshops");
    }
}
