use axum::Json;
use axum::extract::State;

use yugam_service::report::DashboardView;

use crate::dto::response::ApiResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /
pub async fn dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<ApiResponse<DashboardView>> {
    Json(ApiResponse::ok(
        state.dashboard_service.dashboard(auth.context()).await,
    ))
}
