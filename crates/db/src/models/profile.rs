use folio_core::types::Timestamp;
use serde::Serialize;
use sqlx::FromRow;

/// The single row of the `profile` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: i16,
    pub name: String,
    pub title: String,
    pub tagline: String,
    pub about: String,
    pub email: String,
    pub phone: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub upwork: Option<String>,
    pub location: Option<String>,
    pub open_to_work: bool,
    pub years_exp: i32,
    pub clients_served: i32,
    pub projects_count: i32,
    pub photo_url: Option<String>,
    pub resume_url: Option<String>,
    pub resume_updated_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
