//! Repository for the `testimonials` table.

use folio_core::types::DbId;
use folio_core::validation::schemas::TestimonialForm;
use sqlx::PgPool;

use crate::models::testimonial::Testimonial;

/// Column list for `testimonials` queries.
const COLUMNS: &str = "\
    id, content, author_name, author_title, author_company, author_photo, \
    sort_order, created_at, updated_at";

/// Provides data access for testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// List all testimonials in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials ORDER BY sort_order ASC");
        sqlx::query_as::<_, Testimonial>(&query).fetch_all(pool).await
    }

    /// Count all testimonials.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM testimonials")
            .fetch_one(pool)
            .await
    }

    /// Create a new testimonial with `sort_order` equal to the current row count.
    pub async fn create(pool: &PgPool, form: &TestimonialForm) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials \
                 (content, author_name, author_title, author_company, author_photo, sort_order) \
             VALUES ($1, $2, $3, $4, $5, (SELECT COUNT(*) FROM testimonials)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&form.content)
            .bind(&form.author_name)
            .bind(&form.author_title)
            .bind(&form.author_company)
            .bind(&form.author_photo)
            .fetch_one(pool)
            .await
    }

    /// Replace a testimonial's content fields. `sort_order` is never changed.
    ///
    /// Returns `None` if the testimonial does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        form: &TestimonialForm,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET \
                 content = $2, \
                 author_name = $3, \
                 author_title = $4, \
                 author_company = $5, \
                 author_photo = $6, \
                 updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(&form.content)
            .bind(&form.author_name)
            .bind(&form.author_title)
            .bind(&form.author_company)
            .bind(&form.author_photo)
            .fetch_optional(pool)
            .await
    }

    /// Delete a testimonial by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
