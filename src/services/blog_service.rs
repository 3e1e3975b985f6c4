use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::blog_dto::BlogPayload;
use crate::error::{Error, Result};
use crate::models::blog::Blog;

#[derive(Clone)]
pub struct BlogService {
    pool: PgPool,
}

impl BlogService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_all(&self) -> Result<Vec<Blog>> {
        let blogs = sqlx::query_as::<_, Blog>(
            r#"
            SELECT id, title, excerpt, content, category, author, read_time, image_url, created_at, updated_at
            FROM blogs
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(blogs)
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Blog> {
        let blog = sqlx::query_as::<_, Blog>(
            r#"
            SELECT id, title, excerpt, content, category, author, read_time, image_url, created_at, updated_at
            FROM blogs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Blog not found with id: {}", id)))?;

        Ok(blog)
    }

    pub async fn create(&self, payload: BlogPayload) -> Result<Blog> {
        let blog = sqlx::query_as::<_, Blog>(
            r#"
            INSERT INTO blogs (title, excerpt, content, category, author, read_time, image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, excerpt, content, category, author, read_time, image_url, created_at, updated_at
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.excerpt)
        .bind(&payload.content)
        .bind(&payload.category)
        .bind(&payload.author)
        .bind(&payload.read_time)
        .bind(&payload.image_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(blog)
    }

    /// PUT semantics: every field is replaced, `updated_at` bumps.
    pub async fn update(&self, id: Uuid, payload: BlogPayload) -> Result<Blog> {
        let blog = sqlx::query_as::<_, Blog>(
            r#"
            UPDATE blogs
            SET title = $2,
                excerpt = $3,
                content = $4,
                category = $5,
                author = $6,
                read_time = $7,
                image_url = $8,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, title, excerpt, content, category, author, read_time, image_url, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&payload.title)
        .bind(&payload.excerpt)
        .bind(&payload.content)
        .bind(&payload.category)
        .bind(&payload.author)
        .bind(&payload.read_time)
        .bind(&payload.image_url)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Blog not found with id: {}", id)))?;

        Ok(blog)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let res = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Blog not found with id: {}", id)));
        }
        Ok(())
    }

    pub async fn count(&self) -> Result<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM blogs")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }
}
