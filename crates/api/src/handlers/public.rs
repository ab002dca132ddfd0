//! Public read handlers and the contact form.
//!
//! Reads serve from the page cache when possible and repopulate it on a
//! miss; mutations elsewhere invalidate the affected entries. The contact
//! form is the only public write.

use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::validation::schemas::ContactForm;
use folio_core::validation::FormInput;
use folio_db::repositories::{
    ContactMessageRepo, ProfileRepo, ProjectRepo, SkillRepo, TestimonialRepo,
};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Serve `path` from the cache, or render it with `fetch` and cache the
/// result. The epoch is captured before the fetch so a body that predates a
/// concurrent invalidation is never stored.
macro_rules! cached {
    ($state:expr, $path:expr, $fetch:expr) => {{
        if let Some(cached) = $state.page_cache.get($path).await {
            return Ok(Json(DataResponse { data: cached }));
        }
        let epoch = $state.page_cache.epoch().await;
        let rows = $fetch.await?;
        let body = serde_json::to_value(&rows).map_err(|e| AppError::Internal(e.to_string()))?;
        $state.page_cache.put($path, body.clone(), epoch).await;
        Ok(Json(DataResponse { data: body }))
    }};
}

/// GET /api/v1/profile
///
/// The profile singleton; `data` is null until the first save.
pub async fn get_profile(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<serde_json::Value>>> {
    cached!(state, "/api/v1/profile", ProfileRepo::get(&state.pool))
}

/// GET /api/v1/projects
pub async fn get_projects(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<serde_json::Value>>> {
    cached!(state, "/api/v1/projects", ProjectRepo::list(&state.pool))
}

/// GET /api/v1/projects/featured
pub async fn get_featured_projects(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<serde_json::Value>>> {
    cached!(
        state,
        "/api/v1/projects/featured",
        ProjectRepo::list_featured(&state.pool)
    )
}

/// GET /api/v1/skills
pub async fn get_skills(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<serde_json::Value>>> {
    cached!(state, "/api/v1/skills", SkillRepo::list(&state.pool))
}

/// GET /api/v1/testimonials
pub async fn get_testimonials(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<serde_json::Value>>> {
    cached!(
        state,
        "/api/v1/testimonials",
        TestimonialRepo::list(&state.pool)
    )
}

/// POST /api/v1/contact
///
/// The public contact form. Validation failure rejects the whole
/// submission; nothing is persisted.
pub async fn submit_contact(
    State(state): State<AppState>,
    Form(input): Form<FormInput>,
) -> AppResult<impl IntoResponse> {
    let form = ContactForm::parse(&input)?;
    let message = ContactMessageRepo::create(&state.pool, &form).await?;

    tracing::info!(message_id = message.id, "Contact message received");

    Ok((StatusCode::CREATED, Json(DataResponse { data: message })))
}
