use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::job_dto::{DeletedResponse, JobPayload},
    error::Result,
    models::job::Job,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/jobs",
    responses(
        (status = 200, description = "Active job openings", body = Json<Vec<Job>>)
    )
)]
#[axum::debug_handler]
pub async fn list_public_jobs(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let jobs = state.job_service.list_active().await?;
    Ok(Json(jobs))
}

#[utoipa::path(
    get,
    path = "/api/jobs/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job found", body = Json<Job>),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let job = state.job_service.get_by_id(id).await?;
    Ok(Json(job))
}

#[utoipa::path(
    get,
    path = "/api/admin/jobs",
    responses(
        (status = 200, description = "All jobs, active and inactive", body = Json<Vec<Job>>),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn list_admin_jobs(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let jobs = state.job_service.list_all().await?;
    Ok(Json(jobs))
}

#[utoipa::path(
    post,
    path = "/api/admin/jobs",
    request_body = JobPayload,
    responses(
        (status = 201, description = "Job created", body = Json<Job>),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn create_job(
    State(state): State<AppState>,
    Json(payload): Json<JobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job = state.job_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(job)))
}

#[utoipa::path(
    put,
    path = "/api/admin/jobs/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    request_body = JobPayload,
    responses(
        (status = 200, description = "Job updated", body = Json<Job>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn update_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<JobPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let job = state.job_service.update(id, payload).await?;
    Ok(Json(job))
}

#[utoipa::path(
    delete,
    path = "/api/admin/jobs/{id}",
    params(
        ("id" = Uuid, Path, description = "Job ID")
    ),
    responses(
        (status = 200, description = "Job deleted"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.job_service.delete(id).await?;
    Ok(Json(DeletedResponse {
        message: "Job deleted successfully".to_string(),
    }))
}
