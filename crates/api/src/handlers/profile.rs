//! Admin handlers for the profile singleton.

use axum::extract::{Form, State};
use axum::Json;
use folio_core::error::CoreError;
use folio_core::validation::schemas::ProfileForm;
use folio_core::validation::FormInput;
use folio_db::models::profile::Profile;
use folio_db::repositories::ProfileRepo;
use serde::Deserialize;

use crate::cache::paths;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for the photo and resume URL updates.
#[derive(Debug, Deserialize)]
pub struct UrlPayload {
    pub url: String,
}

/// PUT /admin/profile
///
/// Validate and upsert the profile. The single row is created on first
/// save and updated in place thereafter.
pub async fn upsert_profile(
    _session: AdminSession,
    State(state): State<AppState>,
    Form(input): Form<FormInput>,
) -> AppResult<Json<DataResponse<Profile>>> {
    let form = ProfileForm::parse(&input)?;
    let profile = ProfileRepo::upsert(&state.pool, &form).await?;

    state.page_cache.invalidate_detached(paths::PROFILE);
    tracing::info!("Profile saved");

    Ok(Json(DataResponse { data: profile }))
}

/// PUT /admin/profile/photo
///
/// Point the profile photo at an uploaded file's URL.
pub async fn set_photo(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(payload): Json<UrlPayload>,
) -> AppResult<Json<DataResponse<Profile>>> {
    let profile = ProfileRepo::set_photo_url(&state.pool, &payload.url)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: 1,
        }))?;

    state.page_cache.invalidate_detached(paths::PROFILE);
    tracing::info!(url = %payload.url, "Profile photo updated");

    Ok(Json(DataResponse { data: profile }))
}

/// PUT /admin/profile/resume
///
/// Point the resume at an uploaded file's URL and stamp the update time.
pub async fn set_resume(
    _session: AdminSession,
    State(state): State<AppState>,
    Json(payload): Json<UrlPayload>,
) -> AppResult<Json<DataResponse<Profile>>> {
    let profile = ProfileRepo::set_resume_url(&state.pool, &payload.url)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: 1,
        }))?;

    state.page_cache.invalidate_detached(paths::PROFILE);
    tracing::info!(url = %payload.url, "Resume updated");

    Ok(Json(DataResponse { data: profile }))
}
