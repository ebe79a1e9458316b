//! Finance team pages.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde_json::Value;

use yugam_core::types::ListFilter;
use yugam_entity::{Category, Expense, Product};
use yugam_service::{LedgerScope, Scope};
use yugam_service::program::ApprovalTarget;
use yugam_service::report::ReportView;
use yugam_service::view::{BudgetRow, ItemRow, ListView};

use super::program;
use crate::dto::request::ApprovalForm;
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /finance/events
pub async fn events(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filter): Query<ListFilter>,
) -> Json<ApiResponse<ListView<ItemRow>>> {
    Json(ApiResponse::ok(
        state
            .listing_service
            .events(auth.context(), &Scope::All, filter)
            .await,
    ))
}

/// GET /finance/budgets
pub async fn budgets(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<ApiResponse<ListView<BudgetRow>>> {
    Json(ApiResponse::ok(
        state
            .listing_service
            .budgets(auth.context(), &LedgerScope::All)
            .await,
    ))
}

/// POST /finance/budgets/{id}/approve
pub async fn approve_budget(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(form): ValidatedJson<ApprovalForm>,
) -> ApiResult<Json<ApiResponse<Value>>> {
    program::decide(&state, &auth, ApprovalTarget::Budget, &id, form).await
}

/// GET /finance/expenses
pub async fn expenses(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<ApiResponse<ListView<Expense>>> {
    Json(ApiResponse::ok(
        state
            .listing_service
            .expenses(auth.context(), &LedgerScope::All)
            .await,
    ))
}

/// GET /finance/products
pub async fn products(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<ApiResponse<ListView<Product>>> {
    Json(ApiResponse::ok(state.listing_service.products(auth.context()).await))
}

/// GET /finance/categories
pub async fn categories(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<ApiResponse<ListView<Category>>> {
    Json(ApiResponse::ok(
        state.listing_service.categories(auth.context()).await,
    ))
}

/// GET /finance/reports
pub async fn reports(State(state): State<AppState>, auth: AuthUser) -> Json<ApiResponse<ReportView>> {
    Json(ApiResponse::ok(
        state.report_service.report(auth.context(), &Scope::All).await,
    ))
}
