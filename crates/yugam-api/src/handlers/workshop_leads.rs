//! Workshop lead pages, scoped to the workshops the user created.

use axum::Json;
use axum::extract::{Query, State};
use axum::response::Redirect;

use yugam_core::types::ListFilter;
use yugam_entity::{Expense, ItemKind};
use yugam_service::{LedgerScope, Scope};
use yugam_service::program::CreateFormView;
use yugam_service::view::{BudgetRow, ItemRow, ListView};

use super::program;
use crate::dto::request::CreateWorkshopForm;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

const WORKSHOPS_PAGE: &str = "/workshop-leads/workshops";

/// GET /workshop-leads/workshops
pub async fn workshops(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filter): Query<ListFilter>,
) -> Json<ApiResponse<ListView<ItemRow>>> {
    let scope = Scope::created_by(auth.context());
    Json(ApiResponse::ok(
        state
            .listing_service
            .workshops(auth.context(), &scope, filter)
            .await,
    ))
}

/// GET /workshop-leads/budgets
pub async fn budgets(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<ApiResponse<ListView<BudgetRow>>> {
    let ledger = LedgerScope::attached(ItemKind::Workshop, Scope::created_by(auth.context()));
    Json(ApiResponse::ok(
        state
            .listing_service
            .budgets(auth.context(), &ledger)
            .await,
    ))
}

/// GET /workshop-leads/expenses
pub async fn expenses(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<ApiResponse<ListView<Expense>>> {
    let ledger = LedgerScope::attached(ItemKind::Workshop, Scope::created_by(auth.context()));
    Json(ApiResponse::ok(
        state
            .listing_service
            .expenses(auth.context(), &ledger)
            .await,
    ))
}

/// GET /workshop-leads/workshops/create
pub async fn create_form(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<ApiResponse<CreateFormView>> {
    program::create_form(&state, &auth).await
}

/// POST /workshop-leads/workshops/create
pub async fn create_workshop(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(form): ValidatedJson<CreateWorkshopForm>,
) -> ApiResult<Redirect> {
    program::submit_workshop(&state, &auth, form, WORKSHOPS_PAGE).await
}
