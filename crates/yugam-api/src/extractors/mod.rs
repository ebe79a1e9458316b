//! Custom Axum extractors.

pub mod auth;
pub mod validated;

pub use auth::{AuthUser, session_token};
pub use validated::ValidatedJson;
