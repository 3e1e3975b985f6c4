use axum::{
    extract::State,
    response::{IntoResponse, Json},
};

use crate::{dto::admin_dto::DashboardStats, error::Result, AppState};

#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    responses(
        (status = 200, description = "Back-office counters", body = Json<DashboardStats>),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn get_dashboard_stats(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let (total_jobs, active_jobs) = state.job_service.counts().await?;
    let (total_applications, new_applications) = state.application_service.counts().await?;
    let (total_messages, unread_messages) = state.contact_service.counts().await?;
    let total_blogs = state.blog_service.count().await?;

    Ok(Json(DashboardStats {
        total_jobs,
        active_jobs,
        total_applications,
        new_applications,
        total_messages,
        unread_messages,
        total_blogs,
    }))
}
