//! Handlers for login and logout.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use serde::{Deserialize, Serialize};

use crate::auth::credentials::{authenticate, AuthOutcome};
use crate::auth::jwt::generate_session_token;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::SESSION_COOKIE;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Session lifetime in seconds.
    pub expires_in: i64,
}

/// POST /auth/login
///
/// Check the submitted credential pair against the configured admin
/// identity. On success, issue a session token both in the body and as an
/// HttpOnly cookie. On any failure the response is the same 401; nothing
/// reveals which part of the pair was wrong.
///
/// The body extractor is taken as a `Result` so a malformed payload gets
/// the standard JSON error envelope instead of axum's default rejection.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;
    match authenticate(&input.email, &input.password, &state.config.admin) {
        AuthOutcome::Authenticated => {
            let token = generate_session_token(&state.config.session)
                .map_err(|e| AppError::Internal(format!("Token generation error: {e}")))?;
            let expires_in = state.config.session.expiry_hours * 3600;

            let cookie = format!(
                "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={expires_in}"
            );

            tracing::info!("Admin logged in");

            Ok(([(SET_COOKIE, cookie)], Json(LoginResponse { token, expires_in })))
        }
        AuthOutcome::Unauthenticated => Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        ))),
    }
}

/// POST /auth/logout
///
/// Expire the session cookie. The token itself is stateless, so logout is
/// purely a client-side affair. Returns 204 No Content.
pub async fn logout() -> impl IntoResponse {
    let cookie = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    ([(SET_COOKIE, cookie)], StatusCode::NO_CONTENT)
}
