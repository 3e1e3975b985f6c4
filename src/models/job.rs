use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Job openings shown on the careers page. The wire shape matches what the
/// site frontend already consumes (`type`, `active`, camelCase keys).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub department: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub description: String,
    pub requirements: String,
    #[serde(rename = "active")]
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
