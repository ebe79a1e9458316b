//! Coordinator pages: only items the user coordinates.

use axum::Json;
use axum::extract::{Query, State};

use yugam_core::types::ListFilter;
use yugam_service::Scope;
use yugam_service::report::ReportView;
use yugam_service::view::{ItemRow, ListView};

use crate::dto::response::ApiResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /coordinator/events
pub async fn events(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filter): Query<ListFilter>,
) -> Json<ApiResponse<ListView<ItemRow>>> {
    Json(ApiResponse::ok(
        state.coordinator_service.events(auth.context(), filter).await,
    ))
}

/// GET /coordinator/reports
pub async fn reports(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<ApiResponse<ReportView>> {
    let scope = Scope::coordinated_by(auth.context());
    Json(ApiResponse::ok(
        state.report_service.report(auth.context(), &scope).await,
    ))
}
