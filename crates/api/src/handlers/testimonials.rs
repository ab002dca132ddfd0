//! Admin handlers for testimonials.

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use folio_core::error::CoreError;
use folio_core::types::DbId;
use folio_core::validation::schemas::TestimonialForm;
use folio_core::validation::FormInput;
use folio_db::repositories::TestimonialRepo;

use crate::cache::paths;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AdminSession;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /admin/testimonials
pub async fn list_testimonials(
    _session: AdminSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let testimonials = TestimonialRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: testimonials }))
}

/// POST /admin/testimonials
pub async fn create_testimonial(
    _session: AdminSession,
    State(state): State<AppState>,
    Form(input): Form<FormInput>,
) -> AppResult<impl IntoResponse> {
    let form = TestimonialForm::parse(&input)?;
    let testimonial = TestimonialRepo::create(&state.pool, &form).await?;

    state.page_cache.invalidate_detached(paths::TESTIMONIALS);
    tracing::info!(
        testimonial_id = testimonial.id,
        author = %testimonial.author_name,
        "Testimonial created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: testimonial })))
}

/// PUT /admin/testimonials/{id}
pub async fn update_testimonial(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(input): Form<FormInput>,
) -> AppResult<impl IntoResponse> {
    let form = TestimonialForm::parse(&input)?;
    let testimonial = TestimonialRepo::update(&state.pool, id, &form)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }))?;

    state.page_cache.invalidate_detached(paths::TESTIMONIALS);
    tracing::info!(testimonial_id = id, "Testimonial updated");

    Ok(Json(DataResponse { data: testimonial }))
}

/// DELETE /admin/testimonials/{id}
pub async fn delete_testimonial(
    _session: AdminSession,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = TestimonialRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Testimonial",
            id,
        }));
    }

    state.page_cache.invalidate_detached(paths::TESTIMONIALS);
    tracing::info!(testimonial_id = id, "Testimonial deleted");

    Ok(StatusCode::NO_CONTENT)
}
