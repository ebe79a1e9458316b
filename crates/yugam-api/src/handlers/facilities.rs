//! Facilities team pages.

use axum::Json;
use axum::extract::{Query, State};

use yugam_core::types::ListFilter;
use yugam_entity::{Expense, Product, Venue};
use yugam_service::{LedgerScope, Scope};
use yugam_service::view::{ItemRow, ListView};

use crate::dto::response::ApiResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /facilities/events
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

/// GET /facilities/expenses
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

/// GET /facilities/products
pub async fn products(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Json<ApiResponse<ListView<Product>>> {
    Json(ApiResponse::ok(state.listing_service.products(auth.context()).await))
}

/// GET /facilities/venues
pub async fn venues(State(state): State<AppState>, auth: AuthUser) -> Json<ApiResponse<ListView<Venue>>> {
    Json(ApiResponse::ok(state.listing_service.venues(auth.context()).await))
}
