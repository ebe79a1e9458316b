//! Sign-in, sign-out and the unauthorized page.

use axum::Json;
use axum::extract::State;
use axum::response::Redirect;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::info;

use yugam_core::config::AuthConfig;

use crate::dto::request::LoginForm;
use crate::dto::response::{ApiResponse, MessageResponse, SessionUser};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// GET /login
pub async fn login_page() -> Json<ApiResponse<MessageResponse>> {
    Json(ApiResponse::ok(MessageResponse::new(
        "Sign in with your Yugam email and password",
    )))
}

/// POST /login
///
/// Authenticates against the remote API and stores the remote token inside
/// a signed session cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(form): ValidatedJson<LoginForm>,
) -> ApiResult<(CookieJar, Json<ApiResponse<SessionUser>>)> {
    let remote = state.client.auth().login(&form.into()).await?;
    let session = state.session_encoder.issue(&remote.user, &remote.token)?;

    info!(
        user_id = %remote.user.id,
        role = %remote.user.role.as_str(),
        "User signed in"
    );

    let cookie = session_cookie(&state.config.auth, session.token.clone());
    Ok((jar.add(cookie), Json(ApiResponse::ok(SessionUser::from(&session)))))
}

/// POST /logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    info!(user_id = %auth.user_id, "User signed out");
    let cookie = session_cookie(&state.config.auth, String::new());
    (jar.remove(cookie), Redirect::to("/login"))
}

/// GET /unauthorized
pub async fn unauthorized() -> Json<ApiResponse<MessageResponse>> {
    Json(ApiResponse::ok(MessageResponse::new(
        "You do not have permission to view that page",
    )))
}

fn session_cookie(config: &AuthConfig, value: String) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), value))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .build()
}
