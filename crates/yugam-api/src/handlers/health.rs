//! Health check and fallback handlers.

use axum::Json;

use yugam_core::error::AppError;

use crate::dto::response::{ApiResponse, HealthResponse};
use crate::error::ApiError;

/// GET /health
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::ok(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// Any path without a route. Unknown paths only get here once signed in.
pub async fn not_found() -> ApiError {
    ApiError(AppError::not_found("Page not found"))
}
