//! Admin pages: every record, approvals, create forms and the CSV template.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Redirect};
use serde_json::Value;

use yugam_core::types::ListFilter;
use yugam_entity::{AuditLogEntry, Category, Expense, Notification, Product, User, Venue};
use yugam_service::{LedgerScope, Scope};
use yugam_service::program::{ApprovalTarget, CreateFormView};
use yugam_service::report::ReportView;
use yugam_service::view::{BudgetRow, CsvDownload, ItemRow, ListView};

use super::program;
use crate::dto::request::{ApprovalForm, CreateEventForm, CreateWorkshopForm};
use crate::dto::response::ApiResponse;
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /admin/users
pub async fn users(State(state): State<AppState>, auth: AuthUser) -> Json<ApiResponse<ListView<User>>> {
    Json(ApiResponse::ok(state.listing_service.users(auth.context()).await))
}

/// GET /admin/venues
pub async fn venues(State(state): State<AppState>, auth: AuthUser) -> Json<ApiResponse<ListView<Venue>>> {
    Json(ApiResponse::ok(state.listing_service.venues(auth.context()).await))
}

/// GET /admin/categories
pub async fn categories(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<ApiResponse<ListView<Category>>> {
    Json(ApiResponse::ok(
        state.listing_service.categories(auth.context()).await,
    ))
}

/// GET /admin/products
pub async fn products(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<ApiResponse<ListView<Product>>> {
    Json(ApiResponse::ok(state.listing_service.products(auth.context()).await))
}

/// GET /admin/notifications
pub async fn notifications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<ApiResponse<ListView<Notification>>> {
    Json(ApiResponse::ok(
        state.listing_service.notifications(auth.context()).await,
    ))
}

/// GET /admin/logs
pub async fn logs(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<ApiResponse<ListView<AuditLogEntry>>> {
    Json(ApiResponse::ok(state.listing_service.logs(auth.context()).await))
}

/// GET /admin/events
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

/// GET /admin/workshops
pub async fn workshops(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(filter): Query<ListFilter>,
) -> Json<ApiResponse<ListView<ItemRow>>> {
    Json(ApiResponse::ok(
        state
            .listing_service
            .workshops(auth.context(), &Scope::All, filter)
            .await,
    ))
}

/// POST /admin/events/{id}/approve
pub async fn approve_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(form): ValidatedJson<ApprovalForm>,
) -> ApiResult<Json<ApiResponse<Value>>> {
    program::decide(&state, &auth, ApprovalTarget::Event, &id, form).await
}

/// POST /admin/workshops/{id}/approve
pub async fn approve_workshop(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ValidatedJson(form): ValidatedJson<ApprovalForm>,
) -> ApiResult<Json<ApiResponse<Value>>> {
    program::decide(&state, &auth, ApprovalTarget::Workshop, &id, form).await
}

/// GET /admin/events/create and /admin/workshops/create
pub async fn create_form(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<ApiResponse<CreateFormView>> {
    program::create_form(&state, &auth).await
}

/// POST /admin/events/create
pub async fn create_event(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(form): ValidatedJson<CreateEventForm>,
) -> ApiResult<Redirect> {
    program::submit_event(&state, &auth, form, "/admin/events").await
}

/// POST /admin/workshops/create
pub async fn create_workshop(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(form): ValidatedJson<CreateWorkshopForm>,
) -> ApiResult<Redirect> {
    program::submit_workshop(&state, &auth, form, "/admin/workshops").await
}

/// GET /admin/workshops/template.csv
pub async fn workshop_template() -> impl IntoResponse {
    let csv = CsvDownload::workshop_template();
    (
        [
            (header::CONTENT_TYPE, csv.content_type.to_string()),
            (header::CONTENT_DISPOSITION, csv.disposition()),
        ],
        csv.body,
    )
}

/// GET /admin/budgets
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

/// GET /admin/expenses
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

/// GET /admin/reports
pub async fn reports(State(state): State<AppState>, auth: AuthUser) -> Json<ApiResponse<ReportView>> {
    Json(ApiResponse::ok(
        state.report_service.report(auth.context(), &Scope::All).await,
    ))
}
