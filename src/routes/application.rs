use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::application_dto::{ApplicationRequest, ApplicationResponse, UpdateStatusPayload},
    error::Result,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/applications/apply",
    request_body = ApplicationRequest,
    responses(
        (status = 200, description = "Application submitted"),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Job not found")
    )
)]
#[axum::debug_handler]
pub async fn apply_for_job(
    State(state): State<AppState>,
    Json(payload): Json<ApplicationRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state.application_service.submit(payload).await?;
    Ok(Json(json!({ "message": "Application submitted successfully" })))
}

#[utoipa::path(
    get,
    path = "/api/admin/applications",
    responses(
        (status = 200, description = "Applications newest-first with job embedded", body = Json<Vec<ApplicationResponse>>),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn list_applications(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let rows = state.application_service.list_all().await?;
    let items: Vec<ApplicationResponse> = rows.into_iter().map(Into::into).collect();
    Ok(Json(items))
}

#[utoipa::path(
    patch,
    path = "/api/admin/applications/{id}/status",
    params(
        ("id" = Uuid, Path, description = "Application ID")
    ),
    request_body = UpdateStatusPayload,
    responses(
        (status = 200, description = "Status updated", body = Json<ApplicationResponse>),
        (status = 400, description = "Unknown status value"),
        (status = 404, description = "Application not found")
    )
)]
#[axum::debug_handler]
pub async fn update_application_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStatusPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let row = state
        .application_service
        .update_status(id, &payload.status)
        .await?;
    Ok(Json(ApplicationResponse::from(row)))
}
