use serde::{Deserialize, Serialize};

/// Counters for the back-office dashboard landing page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_jobs: i64,
    pub active_jobs: i64,
    pub total_applications: i64,
    pub new_applications: i64,
    pub total_messages: i64,
    pub unread_messages: i64,
    pub total_blogs: i64,
}
