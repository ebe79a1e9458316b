//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod auth;
pub mod backend;
pub mod logging;

pub use app::{CorsConfig, ServerConfig};
pub use auth::AuthConfig;
pub use backend::BackendConfig;
pub use logging::LoggingConfig;

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Root application configuration.
///
/// Top-level deserialization target for the merged TOML configuration
/// files (default.toml + environment overlay) and `YUGAM__*` variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Remote Yugam API settings.
    #[serde(default)]
    pub backend: BackendConfig,
    /// Session token settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file plus `YUGAM__` environment variables.
    ///
    /// A missing file is not an error; every section has defaults.
    pub fn load(path: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(
                config::Environment::with_prefix("YUGAM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Load the default file and overlay `config/{env}.toml` when present.
    pub fn load_for_env(default_path: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(default_path).required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("YUGAM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Reject configurations the server cannot start with.
    pub fn validate(&self) -> Result<(), AppError> {
        self.backend.parsed_base_url()?;
        if self.auth.session_secret.len() < 16 {
            return Err(AppError::configuration(
                "auth.session_secret must be at least 16 characters",
            ));
        }
        if self.auth.session_secret == auth::DEFAULT_SESSION_SECRET {
            tracing::warn!("auth.session_secret is the built-in default; set YUGAM__AUTH__SESSION_SECRET");
        }
        Ok(())
    }
}
