use axum::Json;
use axum::extract::{Path, State};

use yugam_entity::{Event, Workshop};
use yugam_service::detail::DetailView;

use crate::dto::response::ApiResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /events/{id}
pub async fn event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Json<ApiResponse<DetailView<Event>>> {
    Json(ApiResponse::ok(
        state.detail_service.event(auth.context(), &id).await,
    ))
}

/// GET /workshops/{id}
pub async fn workshop(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Json<ApiResponse<DetailView<Workshop>>> {
    Json(ApiResponse::ok(
        state.detail_service.workshop(auth.context(), &id).await,
    ))
}
