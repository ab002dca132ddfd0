use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
    pub tech_stack: Vec<String>,
    pub category: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub outcome: Option<String>,
    pub featured: bool,
    pub sort_order: i64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
