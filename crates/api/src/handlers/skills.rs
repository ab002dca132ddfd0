//! Admin handlers for skills.

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::validation::schemas::SkillForm;
use folio_core::validation::FormInput;
use folio_db::repositories::SkillRepo;

use crate::cache::paths;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /admin/skills
pub async fn list_skills(
    _session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let skills = SkillRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: skills }))
}

/// POST /admin/skills
pub async fn create_skill(
    _session: AdminSession,
    State(state): State<AppState>,
    Form(input): Form<FormInput>,
) -> AppResult<impl IntoResponse> {
    let form = SkillForm::parse(&input)?;
    let skill = SkillRepo::create(&state.pool, &form).await?;

    state.page_cache.invalidate_detached(paths::SKILLS);
    tracing::info!(skill_id = skill.id, name = %skill.name, "Skill created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: skill })))
}

/// DELETE /admin/skills/{id}
pub async fn delete_skill(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = SkillRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Skill",
            id,
        }));
    }

    state.page_cache.invalidate_detached(paths::SKILLS);
    tracing::info!(skill_id = id, "Skill deleted");

    Ok(StatusCode::NO_CONTENT)
}
