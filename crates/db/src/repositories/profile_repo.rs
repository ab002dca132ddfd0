//! Repository for the single-row `profile` table.
//!
//! The table enforces `id = 1`, so writes are plain upserts: two concurrent
//! saves serialize on the primary key instead of racing a find-first check.

use folio_core::validation::schemas::ProfileForm;
use sqlx::PgPool;

use crate::models::profile::Profile;

/// Column list for `profile` queries.
const COLUMNS: &str = "\
    id, name, title, tagline, about, email, phone, linkedin, github, upwork, \
    location, open_to_work, years_exp, clients_served, projects_count, \
    photo_url, resume_url, resume_updated_at, created_at, updated_at";

/// Provides data access for the profile singleton.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Fetch the profile row, if one has ever been saved.
    pub async fn get(pool: &PgPool) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profile WHERE id = 1");
        sqlx::query_as::<_, Profile>(&query).fetch_optional(pool).await
    }

    /// Insert or update the profile row.
    ///
    /// Photo and resume URLs are managed by [`Self::set_photo_url`] and
    /// [`Self::set_resume_url`] and are left untouched here.
    pub async fn upsert(pool: &PgPool, form: &ProfileForm) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profile \
                 (id, name, title, tagline, about, email, phone, linkedin, github, \
                  upwork, location, open_to_work, years_exp, clients_served, projects_count) \
             VALUES (1, $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14) \
             ON CONFLICT (id) DO UPDATE SET \
                 name = EXCLUDED.name, \
                 title = EXCLUDED.title, \
                 tagline = EXCLUDED.tagline, \
                 about = EXCLUDED.about, \
                 email = EXCLUDED.email, \
                 phone = EXCLUDED.phone, \
                 linkedin = EXCLUDED.linkedin, \
                 github = EXCLUDED.github, \
                 upwork = EXCLUDED.upwork, \
                 location = EXCLUDED.location, \
                 open_to_work = EXCLUDED.open_to_work, \
                 years_exp = EXCLUDED.years_exp, \
                 clients_served = EXCLUDED.clients_served, \
                 projects_count = EXCLUDED.projects_count, \
                 updated_at = now() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(&form.name)
            .bind(&form.title)
            .bind(&form.tagline)
            .bind(&form.about)
            .bind(&form.email)
            .bind(&form.phone)
            .bind(&form.linkedin)
            .bind(&form.github)
            .bind(&form.upwork)
            .bind(&form.location)
            .bind(form.open_to_work)
            .bind(form.years_exp)
            .bind(form.clients_served)
            .bind(form.projects_count)
            .fetch_one(pool)
            .await
    }

    /// Set the profile photo URL.
    ///
    /// Returns `None` if no profile row exists yet.
    pub async fn set_photo_url(pool: &PgPool, url: &str) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profile SET photo_url = $1, updated_at = now() \
             WHERE id = 1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(url)
            .fetch_optional(pool)
            .await
    }

    /// Set the resume URL and stamp `resume_updated_at`.
    ///
    /// Returns `None` if no profile row exists yet.
    pub async fn set_resume_url(pool: &PgPool, url: &str) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profile SET resume_url = $1, resume_updated_at = now(), updated_at = now() \
             WHERE id = 1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(url)
            .fetch_optional(pool)
            .await
    }
}
