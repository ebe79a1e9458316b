//! Profile and notification pages open to every signed-in user.

use axum::Json;
use axum::extract::{Path, State};

use yugam_entity::Notification;
use yugam_service::profile::ProfileView;
use yugam_service::view::ListView;

use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /profile
pub async fn profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<ApiResponse<ProfileView>> {
    Json(ApiResponse::ok(
        state.profile_service.profile(auth.context()).await,
    ))
}

/// GET /notifications
pub async fn notifications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<ApiResponse<ListView<Notification>>> {
    Json(ApiResponse::ok(
        state.listing_service.notifications(auth.context()).await,
    ))
}

/// POST /notifications/{id}/read
pub async fn mark_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.profile_service.mark_read(auth.context(), &id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Notification marked as read",
    ))))
}
