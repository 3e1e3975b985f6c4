use serde::{Deserialize, Serialize};
use validator::Validate;

/// Payload for both create (POST) and full-replace update (PUT).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BlogPayload {
    #[validate(length(min = 1, max = 300))]
    pub title: String,
    #[validate(length(min = 1, max = 1000))]
    pub excerpt: String,
    #[validate(length(min = 1))]
    pub content: String,
    #[validate(length(min = 1, max = 100))]
    pub category: String,
    #[validate(length(min = 1, max = 100))]
    pub author: String,
    #[validate(length(min = 1, max = 50))]
    pub read_time: String,
    #[validate(url)]
    pub image_url: Option<String>,
}
