//! Route definitions for the Yugam portal.
//!
//! Routes are grouped by the area of the role-to-route map. The route
//! guard wraps all of them, including the fallback, so an unknown path is
//! treated as an authenticated page that does not exist.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the router with all routes and the route guard.
///
/// Transport layers (CORS, compression, tracing, timeout) are added by
/// [`build_app`](crate::app::build_app).
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(account_routes())
        .merge(admin_routes())
        .merge(finance_routes())
        .merge(event_lead_routes())
        .merge(workshop_lead_routes())
        .merge(facilities_routes())
        .merge(coordinator_routes())
        .fallback(handlers::health::not_found)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::guard::route_guard,
        ))
        .with_state(state)
}

/// Login, unauthorized, health
fn public_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/login",
            get(handlers::auth::login_page).post(handlers::auth::login),
        )
        .route("/unauthorized", get(handlers::auth::unauthorized))
        .route("/health", get(handlers::health::health))
}

/// Pages open to any signed-in user
fn account_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::dashboard::dashboard))
        .route("/logout", post(handlers::auth::logout))
        .route("/profile", get(handlers::profile::profile))
        .route("/notifications", get(handlers::profile::notifications))
        .route(
            "/notifications/{id}/read",
            post(handlers::profile::mark_read),
        )
        .route("/events/{id}", get(handlers::detail::event))
        .route("/workshops/{id}", get(handlers::detail::workshop))
}

fn admin_routes() -> Router<AppState> {
    use handlers::admin;

    Router::new()
        .route("/admin/users", get(admin::users))
        .route("/admin/venues", get(admin::venues))
        .route("/admin/categories", get(admin::categories))
        .route("/admin/products", get(admin::products))
        .route("/admin/notifications", get(admin::notifications))
        .route("/admin/logs", get(admin::logs))
        .route("/admin/events", get(admin::events))
        .route(
            "/admin/events/create",
            get(admin::create_form).post(admin::create_event),
        )
        .route("/admin/events/{id}/approve", post(admin::approve_event))
        .route("/admin/workshops", get(admin::workshops))
        .route(
            "/admin/workshops/create",
            get(admin::create_form).post(admin::create_workshop),
        )
        .route(
            "/admin/workshops/template.csv",
            get(admin::workshop_template),
        )
        .route(
            "/admin/workshops/{id}/approve",
            post(admin::approve_workshop),
        )
        .route("/admin/budgets", get(admin::budgets))
        .route("/admin/expenses", get(admin::expenses))
        .route("/admin/reports", get(admin::reports))
}

fn finance_routes() -> Router<AppState> {
    use handlers::finance;

    Router::new()
        .route("/finance/events", get(finance::events))
        .route("/finance/budgets", get(finance::budgets))
        .route(
            "/finance/budgets/{id}/approve",
            post(finance::approve_budget),
        )
        .route("/finance/expenses", get(finance::expenses))
        .route("/finance/products", get(finance::products))
        .route("/finance/categories", get(finance::categories))
        .route("/finance/reports", get(finance::reports))
}

fn event_lead_routes() -> Router<AppState> {
    use handlers::event_leads;

    Router::new()
        .route("/event-leads/events", get(event_leads::events))
        .route(
            "/event-leads/events/create",
            get(event_leads::create_form).post(event_leads::create_event),
        )
        .route("/event-leads/budgets", get(event_leads::budgets))
        .route("/event-leads/expenses", get(event_leads::expenses))
}

fn workshop_lead_routes() -> Router<AppState> {
    use handlers::workshop_leads;

    Router::new()
        .route("/workshop-leads/workshops", get(workshop_leads::workshops))
        .route(
            "/workshop-leads/workshops/create",
            get(workshop_leads::create_form).post(workshop_leads::create_workshop),
        )
        .route("/workshop-leads/budgets", get(workshop_leads::budgets))
        .route("/workshop-leads/expenses", get(workshop_leads::expenses))
}

fn facilities_routes() -> Router<AppState> {
    use handlers::facilities;

    Router::new()
        .route("/facilities/events", get(facilities::events))
        .route("/facilities/expenses", get(facilities::expenses))
        .route("/facilities/products", get(facilities::products))
        .route("/facilities/venues", get(facilities::venues))
}

fn coordinator_routes() -> Router<AppState> {
    use handlers::coordinator;

    Router::new()
        .route("/coordinator/events", get(coordinator::events))
        .route("/coordinator/reports", get(coordinator::reports))
}
