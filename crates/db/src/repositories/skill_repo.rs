//! Repository for the `skills` table.

use folio_core::types::DbId;
use folio_core::validation::schemas::SkillForm;
use sqlx::PgPool;

use crate::models::skill::Skill;

/// Column list for `skills` queries.
const COLUMNS: &str = "id, name, category, proficiency, sort_order, created_at";

/// Provides data access for skills.
pub struct SkillRepo;

impl SkillRepo {
    /// List all skills in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills ORDER BY sort_order ASC");
        sqlx::query_as::<_, Skill>(&query).fetch_all(pool).await
    }

    /// Count all skills.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM skills")
            .fetch_one(pool)
            .await
    }

    /// Create a new skill with `sort_order` equal to the current row count.
    pub async fn create(pool: &PgPool, form: &SkillForm) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills (name, category, proficiency, sort_order) \
             VALUES ($1, $2, $3, (SELECT COUNT(*) FROM skills)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(&form.name)
            .bind(&form.category)
            .bind(form.proficiency)
            .fetch_one(pool)
            .await
    }

    /// Delete a skill by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
