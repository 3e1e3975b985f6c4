use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::application_dto::ApplicationRequest;
use crate::error::{Error, Result};
use crate::models::application::{is_valid_status, Application, ApplicationJobRow};

#[derive(Clone)]
pub struct ApplicationService {
    pool: PgPool,
}

const ROW_COLUMNS: &str = r#"
    a.id, a.job_id, a.full_name, a.email, a.phone, a.resume_url, a.cover_letter, a.status, a.applied_at,
    j.title AS job_title,
    j.department AS job_department,
    j.location AS job_location,
    j.job_type AS job_job_type,
    j.description AS job_description,
    j.requirements AS job_requirements,
    j.is_active AS job_is_active,
    j.created_at AS job_created_at
"#;

impl ApplicationService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Public apply flow. The job must exist; beyond that there is no
    /// duplicate protection, matching the site's form behavior.
    pub async fn submit(&self, payload: ApplicationRequest) -> Result<Application> {
        let job_exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM jobs WHERE id = $1)",
        )
        .bind(payload.job_id)
        .fetch_one(&self.pool)
        .await?;

        if !job_exists {
            return Err(Error::NotFound(format!(
                "Job not found with id: {}",
                payload.job_id
            )));
        }

        let application = sqlx::query_as::<_, Application>(
            r#"
            INSERT INTO applications (job_id, full_name, email, phone, resume_url, cover_letter)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, job_id, full_name, email, phone, resume_url, cover_letter, status, applied_at
            "#,
        )
        .bind(payload.job_id)
        .bind(&payload.full_name)
        .bind(&payload.email)
        .bind(&payload.phone)
        .bind(&payload.resume_url)
        .bind(&payload.cover_letter)
        .fetch_one(&self.pool)
        .await?;

        Ok(application)
    }

    /// Admin listing, newest first, with the referenced job joined in.
    pub async fn list_all(&self) -> Result<Vec<ApplicationJobRow>> {
        let query = format!(
            "SELECT {ROW_COLUMNS}
             FROM applications a
             JOIN jobs j ON j.id = a.job_id
             ORDER BY a.applied_at DESC"
        );
        let rows = sqlx::query_as::<_, ApplicationJobRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows)
    }

    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<ApplicationJobRow> {
        if !is_valid_status(status) {
            return Err(Error::BadRequest(format!(
                "Invalid application status: {}",
                status
            )));
        }

        let updated = sqlx::query("UPDATE applications SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;
        if updated.rows_affected() == 0 {
            return Err(Error::NotFound("Application not found".to_string()));
        }

        let query = format!(
            "SELECT {ROW_COLUMNS}
             FROM applications a
             JOIN jobs j ON j.id = a.job_id
             WHERE a.id = $1"
        );
        let row = sqlx::query_as::<_, ApplicationJobRow>(&query)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row)
    }

    pub async fn counts(&self) -> Result<(i64, i64)> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM applications")
            .fetch_one(&self.pool)
            .await?;
        let fresh =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM applications WHERE status = 'NEW'")
                .fetch_one(&self.pool)
                .await?;
        Ok((total, fresh))
    }
}
