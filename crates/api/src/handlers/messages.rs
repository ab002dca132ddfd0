//! Admin handlers for contact messages.
//!
//! Messages are created only by the public contact form; the admin side
//! reads, flips the read flag, and deletes. Admin views always read live
//! data, so no cache invalidation happens here.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_db::repositories::ContactMessageRepo;
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /admin/messages
///
/// All messages, newest first.
pub async fn list_messages(
    _session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let messages = ContactMessageRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: messages }))
}

/// GET /admin/messages/unread-count
///
/// Unread message count for the sidebar badge.
pub async fn unread_count(
    _session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let count = ContactMessageRepo::count_unread(&state.pool).await?;
    Ok(Json(DataResponse {
        data: json!({ "count": count }),
    }))
}

/// PATCH /admin/messages/{id}/read
///
/// Flip the read flag false to true. Idempotent.
pub async fn mark_read(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let message = ContactMessageRepo::mark_read(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        }))?;

    Ok(Json(DataResponse { data: message }))
}

/// DELETE /admin/messages/{id}
pub async fn delete_message(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ContactMessageRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "ContactMessage",
            id,
        }));
    }

    tracing::info!(message_id = id, "Contact message deleted");

    Ok(StatusCode::NO_CONTENT)
}
