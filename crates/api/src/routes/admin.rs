//! The protected admin surface, mounted at `/admin`.
//!
//! The session check itself happens in the gate middleware before routing;
//! handlers additionally take the [`AdminSession`] extractor so a handler
//! can never be wired up without it.
//!
//! [`AdminSession`]: crate::middleware::auth::AdminSession

use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, patch, post, put};
use axum::Router;

use crate::handlers::{messages, profile, projects, skills, testimonials, upload};
use crate::state::AppState;

/// ```text
/// PUT    /profile                     -> upsert_profile
/// PUT    /profile/photo               -> set_photo
/// PUT    /profile/resume              -> set_resume
///
/// GET    /projects                    -> list_projects
/// POST   /projects                    -> create_project
/// PUT    /projects/{id}               -> update_project
/// DELETE /projects/{id}               -> delete_project
///
/// GET    /skills                      -> list_skills
/// POST   /skills                      -> create_skill
/// DELETE /skills/{id}                 -> delete_skill
///
/// GET    /testimonials                -> list_testimonials
/// POST   /testimonials                -> create_testimonial
/// PUT    /testimonials/{id}           -> update_testimonial
/// DELETE /testimonials/{id}           -> delete_testimonial
///
/// GET    /messages                    -> list_messages
/// GET    /messages/unread-count       -> unread_count
/// PATCH  /messages/{id}/read          -> mark_read
/// DELETE /messages/{id}               -> delete_message
///
/// POST   /upload                      -> upload
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profile", put(profile::upsert_profile))
        .route("/profile/photo", put(profile::set_photo))
        .route("/profile/resume", put(profile::set_resume))
        .route(
            "/projects",
            get(projects::list_projects).post(projects::create_project),
        )
        .route(
            "/projects/{id}",
            put(projects::update_project).delete(projects::delete_project),
        )
        .route("/skills", get(skills::list_skills).post(skills::create_skill))
        .route("/skills/{id}", delete(skills::delete_skill))
        .route(
            "/testimonials",
            get(testimonials::list_testimonials).post(testimonials::create_testimonial),
        )
        .route(
            "/testimonials/{id}",
            put(testimonials::update_testimonial).delete(testimonials::delete_testimonial),
        )
        .route("/messages", get(messages::list_messages))
        .route("/messages/unread-count", get(messages::unread_count))
        .route("/messages/{id}/read", patch(messages::mark_read))
        .route("/messages/{id}", delete(messages::delete_message))
        .route(
            "/upload",
            post(upload::upload)
                // Let the handler see slightly-oversized bodies so it can
                // answer 413 with the JSON error shape instead of axum's
                // default rejection.
                .layer(DefaultBodyLimit::max(upload::MAX_UPLOAD_BYTES + 64 * 1024)),
        )
}
