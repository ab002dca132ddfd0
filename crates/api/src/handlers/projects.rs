//! Admin handlers for projects.

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::validation::schemas::ProjectForm;
use folio_core::validation::FormInput;
use folio_db::repositories::ProjectRepo;

use crate::cache::paths;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /admin/projects
///
/// Admin list view; always reads live data.
pub async fn list_projects(
    _session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// POST /admin/projects
///
/// Validate and create a project. Display order is the pre-creation count.
pub async fn create_project(
    _session: AdminSession,
    State(state): State<AppState>,
    Form(input): Form<FormInput>,
) -> AppResult<impl IntoResponse> {
    let form = ProjectForm::parse(&input)?;
    let project = ProjectRepo::create(&state.pool, &form).await?;

    state.page_cache.invalidate_detached(paths::PROJECTS);
    tracing::info!(project_id = project.id, title = %project.title, "Project created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// PUT /admin/projects/{id}
pub async fn update_project(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(input): Form<FormInput>,
) -> AppResult<impl IntoResponse> {
    let form = ProjectForm::parse(&input)?;
    let project = ProjectRepo::update(&state.pool, id, &form)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    state.page_cache.invalidate_detached(paths::PROJECTS);
    tracing::info!(project_id = id, "Project updated");

    Ok(Json(DataResponse { data: project }))
}

/// DELETE /admin/projects/{id}
///
/// Deletion leaves a gap in the display order; remaining projects keep
/// their numbers.
pub async fn delete_project(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }));
    }

    state.page_cache.invalidate_detached(paths::PROJECTS);
    tracing::info!(project_id = id, "Project deleted");

    Ok(StatusCode::NO_CONTENT)
}
