//! The admin route gate and session extractor.
//!
//! Every inbound request passes through [`admin_gate`] before routing. A
//! request under the admin path prefix without a valid session token is
//! redirected to the login page; the framework-default sign-in path is
//! unconditionally redirected there as well. An invalid or expired token is
//! treated identically to no token at all.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::{AUTHORIZATION, COOKIE};
use axum::http::request::Parts;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use folio_core::error::CoreError;

use crate::auth::jwt::{validate_session_token, Claims};
use crate::error::AppError;
use crate::state::AppState;

/// Cookie carrying the session token.
pub const SESSION_COOKIE: &str = "folio_session";

/// Path prefix protected by the gate.
pub const ADMIN_PREFIX: &str = "/admin";

/// Redirect destination for unauthenticated admin requests.
pub const LOGIN_PATH: &str = "/login";

/// The framework-default sign-in path; this deployment has no UI there, so
/// it always redirects to the custom login page.
pub const DEFAULT_SIGNIN_PATH: &str = "/api/auth/signin";

/// Pull the session token out of the request headers.
///
/// Accepts either the session cookie or an `Authorization: Bearer` header.
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(bearer) = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
    {
        return Some(bearer.to_string());
    }

    headers
        .get(COOKIE)
        .and_then(|v| v.to_str().ok())?
        .split(';')
        .find_map(|pair| {
            let (name, value) = pair.trim().split_once('=')?;
            (name == SESSION_COOKIE).then(|| value.to_string())
        })
}

/// True if `path` is the admin root or any sub-path of it.
fn is_admin_path(path: &str) -> bool {
    path == ADMIN_PREFIX || path.starts_with("/admin/")
}

/// Request interceptor for the protected route group.
///
/// Runs before route matching so even unrouted paths under `/admin` get the
/// redirect rather than a 404.
pub async fn admin_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path();

    if path == DEFAULT_SIGNIN_PATH {
        return Redirect::to(LOGIN_PATH).into_response();
    }

    if is_admin_path(path) {
        let authenticated = session_token(request.headers())
            .map(|token| validate_session_token(&token, &state.config.session).is_ok())
            .unwrap_or(false);

        if !authenticated {
            return Redirect::to(LOGIN_PATH).into_response();
        }
    }

    next.run(request).await
}

/// Authenticated admin session extracted from the request.
///
/// Use this as an extractor parameter in any handler that needs the session
/// claims (e.g. for audit log fields):
///
/// ```ignore
/// async fn my_handler(session: AdminSession) -> AppResult<Json<()>> {
///     tracing::info!(jti = %session.claims.jti, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub claims: Claims,
}

impl FromRequestParts<AppState> for AdminSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers).ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("No session".into()))
        })?;

        let claims = validate_session_token(&token, &state.config.session)
            .map_err(|_| AppError::Core(CoreError::Unauthorized("No session".into())))?;

        Ok(AdminSession { claims })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_is_admin_path() {
        assert!(is_admin_path("/admin"));
        assert!(is_admin_path("/admin/projects"));
        assert!(is_admin_path("/admin/projects/3"));
        assert!(!is_admin_path("/administrators"));
        assert!(!is_admin_path("/api/v1/projects"));
        assert!(!is_admin_path("/"));
    }

    #[test]
    fn test_session_token_from_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_static("theme=dark; folio_session=abc.def.ghi; other=1"),
        );
        assert_eq!(session_token(&headers).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn test_session_token_prefers_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer tok-1"));
        headers.insert(COOKIE, HeaderValue::from_static("folio_session=tok-2"));
        assert_eq!(session_token(&headers).as_deref(), Some("tok-1"));
    }

    #[test]
    fn test_session_token_absent() {
        assert_eq!(session_token(&HeaderMap::new()), None);

        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("theme=dark"));
        assert_eq!(session_token(&headers), None);
    }
}
