use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload for both create (POST) and full-replace update (PUT).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JobPayload {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[validate(length(min = 1, max = 100))]
    pub department: String,
    #[validate(length(min = 1, max = 100))]
    pub location: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, max = 50))]
    pub job_type: String,
    #[validate(length(min = 1))]
    pub description: String,
    #[validate(length(min = 1))]
    pub requirements: String,
    #[serde(rename = "active", default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub message: String,
}
