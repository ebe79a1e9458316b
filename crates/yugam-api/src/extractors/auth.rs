//! `AuthUser` extractor: turns the claims left by the route guard into a
//! [`RequestContext`].

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum_extra::extract::cookie::CookieJar;

use yugam_auth::SessionClaims;
use yugam_core::error::AppError;
use yugam_service::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<&SessionClaims> for AuthUser {
    fn from(claims: &SessionClaims) -> Self {
        Self(RequestContext::new(
            claims.user_ref(),
            claims.role,
            claims.api_token.clone(),
        ))
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        // The guard has already decoded the token for protected routes.
        if let Some(claims) = parts.extensions.get::<SessionClaims>() {
            return Ok(Self::from(claims));
        }

        let token = session_token(&parts.headers, &state.config.auth.cookie_name)
            .ok_or_else(|| AppError::authentication("Not signed in"))?;
        let claims = state.session_decoder.decode(&token)?;
        Ok(Self::from(&claims))
    }
}

/// The session token from the session cookie, or from an
/// `Authorization: Bearer` header when no cookie is present.
pub fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let jar = CookieJar::from_headers(headers);
    if let Some(cookie) = jar.get(cookie_name) {
        if !cookie.value().is_empty() {
            return Some(cookie.value().to_string());
        }
    }

    headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
}
