//! Route guard middleware.
//!
//! Runs in front of every route. Decodes the session token (cookie or
//! bearer), asks the [`RbacEnforcer`](yugam_auth::RbacEnforcer) whether the
//! path is open to the user and either forwards the request with the
//! claims attached or answers `303 See Other`.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::debug;

use yugam_auth::SessionClaims;

use crate::extractors::session_token;
use crate::state::AppState;

pub async fn route_guard(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let claims = current_claims(&state, &request);
    let role = claims.as_ref().map(|c| &c.role);

    let decision = state.rbac_enforcer.check(role, request.uri().path());
    if let Some(location) = decision.location() {
        return Redirect::to(location).into_response();
    }

    if let Some(claims) = claims {
        request.extensions_mut().insert(claims);
    }
    next.run(request).await
}

/// An invalid or expired token counts as signed out.
fn current_claims(state: &AppState, request: &Request) -> Option<SessionClaims> {
    let token = session_token(request.headers(), &state.config.auth.cookie_name)?;
    match state.session_decoder.decode(&token) {
        Ok(claims) => Some(claims),
        Err(e) => {
            debug!(error = %e, "Ignoring session token");
            None
        }
    }
}
