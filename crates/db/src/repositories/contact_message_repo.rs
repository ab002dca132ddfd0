//! Repository for the `contact_messages` table.

use folio_core::types::DbId;
use folio_core::validation::schemas::ContactForm;
use sqlx::PgPool;

use crate::models::contact_message::ContactMessage;

/// Column list for `contact_messages` queries.
const COLUMNS: &str = "id, name, email, message, read, created_at";

/// Provides data access for contact-form messages.
pub struct ContactMessageRepo;

impl ContactMessageRepo {
    /// List all messages, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContactMessage>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_messages ORDER BY created_at DESC");
        sqlx::query_as::<_, ContactMessage>(&query).fetch_all(pool).await
    }

    /// Store a message submitted through the public contact form.
    pub async fn create(pool: &PgPool, form: &ContactForm) -> Result<ContactMessage, sqlx::Error> {
        let query = format!(
            "INSERT INTO contact_messages (name, email, message) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(&form.name)
            .bind(&form.email)
            .bind(&form.message)
            .fetch_one(pool)
            .await
    }

    /// Mark a message as read. The flag only ever flips false to true.
    ///
    /// Returns `None` if the message does not exist.
    pub async fn mark_read(pool: &PgPool, id: DbId) -> Result<Option<ContactMessage>, sqlx::Error> {
        let query = format!(
            "UPDATE contact_messages SET read = TRUE WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactMessage>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a message by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count unread messages (for the admin badge).
    pub async fn count_unread(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contact_messages WHERE NOT read")
            .fetch_one(pool)
            .await
    }
}
