//! The file upload endpoint.

use axum::extract::{Multipart, State};
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::state::AppState;

/// Upload size ceiling (5 MiB), enforced server-side at the boundary.
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Success response: the public URL of the stored file.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub url: String,
}

/// POST /admin/upload
///
/// Accept one file from a multipart request and hand it to the configured
/// storage provider (cloud object store, or the local uploads directory
/// when no blob credential is configured). Returns `{ "url": ... }`.
pub async fn upload(
    _session: AdminSession,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    let mut file: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or("upload.bin").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(e.to_string()))?;
            file = Some((filename, data.to_vec()));
        }
        // Other fields are ignored.
    }

    let (filename, bytes) = file.ok_or_else(|| AppError::BadRequest("No file provided".into()))?;

    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::PayloadTooLarge);
    }

    let size = bytes.len();
    let url = state.storage.store(&filename, bytes).await?;

    tracing::info!(%filename, size, %url, "File uploaded");

    Ok(Json(UploadResponse { url }))
}
