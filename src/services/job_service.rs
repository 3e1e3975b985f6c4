use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::job_dto::JobPayload;
use crate::error::{Error, Result};
use crate::models::job::Job;

#[derive(Clone)]
pub struct JobService {
    pool: PgPool,
}

impl JobService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Careers page listing: active jobs only, newest first.
    pub async fn list_active(&self) -> Result<Vec<Job>> {
        let jobs = sqlx::query_as::<_, Job>(
            r#"
            SELECT id, title, department, location, job_type, description, requirements, is_active, created_at
            FROM jobs
            WHERE is_active = TRUE
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(jobs)
    }

    /// Admin listing: active and inactive alike.
    pub async fn list_all(&self) -> Result<Vec<Job>> {
        let jobs = sqlx::query_as::<_, Job>(
            r#"
            SELECT id, title, department, location, job_type, description, requirements, is_active, created_at
            FROM jobs
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(jobs)
    }

    /// The apply page deep-links by id, so this intentionally does not
    /// filter on the active flag.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Job> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            SELECT id, title, department, location, job_type, description, requirements, is_active, created_at
            FROM jobs
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Job not found with id: {}", id)))?;

        Ok(job)
    }

    pub async fn create(&self, payload: JobPayload) -> Result<Job> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            INSERT INTO jobs (title, department, location, job_type, description, requirements, is_active)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, department, location, job_type, description, requirements, is_active, created_at
            "#,
        )
        .bind(&payload.title)
        .bind(&payload.department)
        .bind(&payload.location)
        .bind(&payload.job_type)
        .bind(&payload.description)
        .bind(&payload.requirements)
        .bind(payload.is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(job)
    }

    /// PUT semantics: every field is replaced.
    pub async fn update(&self, id: Uuid, payload: JobPayload) -> Result<Job> {
        let job = sqlx::query_as::<_, Job>(
            r#"
            UPDATE jobs
            SET title = $2,
                department = $3,
                location = $4,
                job_type = $5,
                description = $6,
                requirements = $7,
                is_active = $8
            WHERE id = $1
            RETURNING id, title, department, location, job_type, description, requirements, is_active, created_at
            "#,
        )
        .bind(id)
        .bind(&payload.title)
        .bind(&payload.department)
        .bind(&payload.location)
        .bind(&payload.job_type)
        .bind(&payload.description)
        .bind(&payload.requirements)
        .bind(payload.is_active)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Job not found with id: {}", id)))?;

        Ok(job)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let res = sqlx::query("DELETE FROM jobs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if res.rows_affected() == 0 {
            return Err(Error::NotFound(format!("Job not found with id: {}", id)));
        }
        Ok(())
    }

    pub async fn counts(&self) -> Result<(i64, i64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM jobs")
            .fetch_one(&self.pool)
            .await?;
        let active =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM jobs WHERE is_active = TRUE")
                .fetch_one(&self.pool)
                .await?;
        Ok((total, active))
    }
}
