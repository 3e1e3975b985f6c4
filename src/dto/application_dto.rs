use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::application::ApplicationJobRow;
use crate::models::job::Job;

/// The apply-form body. Optional fields come through as empty strings from
/// some form states, so length limits only apply when present.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationRequest {
    pub job_id: Uuid,
    #[validate(length(min = 1, max = 200, message = "Full Name is required"))]
    pub full_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[validate(length(max = 50))]
    pub phone: Option<String>,
    #[validate(url(message = "Resume URL must be a valid URL"))]
    pub resume_url: Option<String>,
    #[validate(length(max = 10000))]
    pub cover_letter: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateStatusPayload {
    #[validate(length(min = 1))]
    pub status: String,
}

/// Admin listing entry: the application with its job embedded, the shape the
/// back-office table renders directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationResponse {
    pub id: Uuid,
    pub job: Job,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
    pub status: String,
    pub applied_at: chrono::DateTime<chrono::Utc>,
}

impl From<ApplicationJobRow> for ApplicationResponse {
    fn from(row: ApplicationJobRow) -> Self {
        Self {
            id: row.id,
            job: Job {
                id: row.job_id,
                title: row.job_title,
                department: row.job_department,
                location: row.job_location,
                job_type: row.job_job_type,
                description: row.job_description,
                requirements: row.job_requirements,
                is_active: row.job_is_active,
                created_at: row.job_created_at,
            },
            full_name: row.full_name,
            email: row.email,
            phone: row.phone,
            resume_url: row.resume_url,
            cover_letter: row.cover_letter,
            status: row.status,
            applied_at: row.applied_at,
        }
    }
}
