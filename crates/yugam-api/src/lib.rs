//! # yugam-api
//!
//! HTTP layer for the Yugam Finance Portal built on Axum.
//!
//! Provides every page route, the role-based route guard, the session
//! extractor, request/response DTOs and the mapping from [`AppError`]
//! to HTTP responses.
//!
//! [`AppError`]: yugam_core::AppError

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::build_app;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
