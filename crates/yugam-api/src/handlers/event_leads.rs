//! Event lead pages, scoped to the events the user created.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::Redirect;

use yugam_core::types::ListFilter;
use yugam_entity::{Expense, ItemKind};
use yugam_service::{LedgerScope, Scope};
use yugam_service::program::CreateFormView;
use yugam_service::view::{BudgetRow, ItemRow, ListView};

use super::program;
use crate::dto::request::CreateEventForm;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

const EVENTS_PAGE: &str = "/event-leads/events";

/// GET /event-leads/events
pub async fn events(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filter): Query<ListFilter>,
) -> Json<ApiResponse<ListView<ItemRow>>> {
    let scope = Scope::created_by(auth.context());
    Json(ApiResponse::ok(
        state
            .listing_service
            .events(auth.context(), &scope, filter)
            .await,
    ))
}

/// GET /event-leads/budgets
pub async fn budgets(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<ApiResponse<ListView<BudgetRow>>> {
    let ledger = LedgerScope::attached(ItemKind::Event, Scope::created_by(auth.context()));
    Json(ApiResponse::ok(
        state
            .listing_service
            .budgets(auth.context(), &ledger)
            .await,
    ))
}

/// GET /event-leads/expenses
pub async fn expenses(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<ApiResponse<ListView<Expense>>> {
    let ledger = LedgerScope::attached(ItemKind::Event, Scope::created_by(auth.context()));
    Json(ApiResponse::ok(
        state
            .listing_service
            .expenses(auth.context(), &ledger)
            .await,
    ))
}

/// GET /event-leads/events/create
pub async fn create_form(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<ApiResponse<CreateFormView>> {
    program::create_form(&state, &auth).await
}

/// POST /event-leads/events/create
pub async fn create_event(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(form): ValidatedJson<CreateEventForm>,
) -> ApiResult<Redirect> {
    program::submit_event(&state, &auth, form, EVENTS_PAGE).await
}
