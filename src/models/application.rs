use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const APPLICATION_STATUSES: &[&str] = &["NEW", "REVIEWING", "REJECTED", "HIRED"];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: Uuid,
    pub job_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
    pub status: String,
    pub applied_at: DateTime<Utc>,
}

/// Flattened row for the admin listing, which joins the referenced job.
#[derive(Debug, Clone, FromRow)]
pub struct ApplicationJobRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub resume_url: Option<String>,
    pub cover_letter: Option<String>,
    pub status: String,
    pub applied_at: DateTime<Utc>,
    pub job_title: String,
    pub job_department: String,
    pub job_location: String,
    pub job_job_type: String,
    pub job_description: String,
    pub job_requirements: String,
    pub job_is_active: bool,
    pub job_created_at: DateTime<Utc>,
}

pub fn is_valid_status(status: &str) -> bool {
    APPLICATION_STATUSES.contains(&status)
}
