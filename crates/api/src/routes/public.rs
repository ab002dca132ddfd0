//! The public read surface, mounted at `/api/v1`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::public;
use crate::state::AppState;

/// Public routes -- no session required.
///
/// ```text
/// GET  /profile              -> get_profile
/// GET  /projects             -> get_projects
/// GET  /projects/featured    -> get_featured_projects
/// GET  /skills               -> get_skills
/// GET  /testimonials         -> get_testimonials
/// POST /contact              -> submit_contact
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/profile", get(public::get_profile))
        .route("/projects", get(public::get_projects))
        .route("/projects/featured", get(public::get_featured_projects))
        .route("/skills", get(public::get_skills))
        .route("/testimonials", get(public::get_testimonials))
        .route("/contact", post(public::submit_contact))
}
