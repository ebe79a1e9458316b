//! Create and approve actions shared by several areas.

use axum::Json;
use axum::response::Redirect;
use serde_json::Value;

use yugam_service::program::{ApprovalTarget, CreateFormView};

use crate::dto::request::{ApprovalForm, CreateEventForm, CreateWorkshopForm};
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

pub(crate) async fn create_form(state: &AppState, auth: &AuthUser) -> Json<ApiResponse<CreateFormView>> {
    Json(ApiResponse::ok(
        state.program_service.create_form(auth.context()).await,
    ))
}

/// Forward a new event, then send the browser to `list_page`.
pub(crate) async fn submit_event(
    state: &AppState,
    auth: &AuthUser,
    form: CreateEventForm,
    list_page: &'static str,
) -> ApiResult<Redirect> {
    state
        .program_service
        .create_event(auth.context(), &form.into())
        .await?;
    Ok(Redirect::to(list_page))
}

pub(crate) async fn submit_workshop(
    state: &AppState,
    auth: &AuthUser,
    form: CreateWorkshopForm,
    list_page: &'static str,
) -> ApiResult<Redirect> {
    state
        .program_service
        .create_workshop(auth.context(), &form.into())
        .await?;
    Ok(Redirect::to(list_page))
}

pub(crate) async fn decide(
    state: &AppState,
    auth: &AuthUser,
    target: ApprovalTarget,
    id: &str,
    form: ApprovalForm,
) -> ApiResult<Json<ApiResponse<Value>>> {
    let decision = form.into_decision()?;
    let resp = state
        .program_service
        .approve(auth.context(), target, id, &decision)
        .await?;
    Ok(Json(ApiResponse::ok(resp)))
}
