use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::contact_dto::ContactMessagePayload;
use crate::error::{Error, Result};
use crate::models::contact_message::ContactMessage;

#[derive(Clone)]
pub struct ContactService {
    pool: PgPool,
}

impl ContactService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn save_message(&self, payload: ContactMessagePayload) -> Result<ContactMessage> {
        let message = sqlx::query_as::<_, ContactMessage>(
            r#"
            INSERT INTO contact_messages (name, email, company, phone, subject, message)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, company, phone, subject, message, is_read, created_at
            "#,
        )
        .bind(&payload.name)
        .bind(&payload.email)
        .bind(&payload.company)
        .bind(&payload.phone)
        .bind(&payload.subject)
        .bind(&payload.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(message)
    }

    pub async fn list_all(&self) -> Result<Vec<ContactMessage>> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            r#"
            SELECT id, name, email, company, phone, subject, message, is_read, created_at
            FROM contact_messages
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    pub async fn mark_as_read(&self, id: Uuid) -> Result<ContactMessage> {
        let message = sqlx::query_as::<_, ContactMessage>(
            r#"
            UPDATE contact_messages
            SET is_read = TRUE
            WHERE id = $1
            RETURNING id, name, email, company, phone, subject, message, is_read, created_at
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound("Message not found".to_string()))?;

        Ok(message)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let res = sqlx::query("DELETE FROM contact_messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Message not found".to_string()));
        }
        Ok(())
    }

    pub async fn counts(&self) -> Result<(i64, i64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM contact_messages")
            .fetch_one(&self.pool)
            .await?;
        let unread = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM contact_messages WHERE is_read = FALSE",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok((total, unread))
    }
}
