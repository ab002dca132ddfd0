//! Repository for the `projects` table.

use folio_core::types::DbId;
use folio_core::validation::schemas::ProjectForm;
use sqlx::PgPool;

use crate::models::project::Project;

/// Column list for `projects` queries.
const COLUMNS: &str = "\
    id, title, description, images, tech_stack, category, github_url, \
    live_url, outcome, featured, sort_order, created_at, updated_at";

/// Provides data access for portfolio projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// List all projects in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY sort_order ASC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List featured projects in display order.
    pub async fn list_featured(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM projects WHERE featured ORDER BY sort_order ASC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Count all projects.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await
    }

    /// Create a new project.
    ///
    /// `sort_order` is assigned inside the insert as the then-current row
    /// count: an append-only sequence, never renumbered on delete.
    pub async fn create(pool: &PgPool, form: &ProjectForm) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects \
                 (title, description, images, tech_stack, category, github_url, \
                  live_url, outcome, featured, sort_order) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, \
                     (SELECT COUNT(*) FROM projects)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&form.title)
            .bind(&form.description)
            .bind(&form.images)
            .bind(&form.tech_stack)
            .bind(&form.category)
            .bind(&form.github_url)
            .bind(&form.live_url)
            .bind(&form.outcome)
            .bind(form.featured)
            .fetch_one(pool)
            .await
    }

    /// Replace a project's content fields. `sort_order` is never changed.
    ///
    /// Returns `None` if the project does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        form: &ProjectForm,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET \
                 title = $2, \
                 description = $3, \
                 images = $4, \
                 tech_stack = $5, \
                 category = $6, \
                 github_url = $7, \
                 live_url = $8, \
                 outcome = $9, \
                 featured = $10, \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&form.title)
            .bind(&form.description)
            .bind(&form.images)
            .bind(&form.tech_stack)
            .bind(&form.category)
            .bind(&form.github_url)
            .bind(&form.live_url)
            .bind(&form.outcome)
            .bind(form.featured)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
