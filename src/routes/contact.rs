use axum::{
    extract::{Path, State},
    response::{IntoResponse, Json},
};
use serde_json::json;
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::contact_dto::ContactMessagePayload,
    error::Result,
    models::contact_message::ContactMessage,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = ContactMessagePayload,
    responses(
        (status = 200, description = "Message stored"),
        (status = 400, description = "Invalid payload")
    )
)]
#[axum::debug_handler]
pub async fn send_message(
    State(state): State<AppState>,
    Json(payload): Json<ContactMessagePayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    state.contact_service.save_message(payload).await?;
    Ok(Json(json!({ "message": "Message sent successfully" })))
}

#[utoipa::path(
    get,
    path = "/api/admin/messages",
    responses(
        (status = 200, description = "Messages newest-first", body = Json<Vec<ContactMessage>>),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn list_messages(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let messages = state.contact_service.list_all().await?;
    Ok(Json(messages))
}

#[utoipa::path(
    patch,
    path = "/api/admin/messages/{id}/read",
    params(
        ("id" = Uuid, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Message marked read", body = Json<ContactMessage>),
        (status = 404, description = "Message not found")
    )
)]
#[axum::debug_handler]
pub async fn mark_message_read(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let message = state.contact_service.mark_as_read(id).await?;
    Ok(Json(message))
}

#[utoipa::path(
    delete,
    path = "/api/admin/messages/{id}",
    params(
        ("id" = Uuid, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Message deleted"),
        (status = 404, description = "Message not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.contact_service.delete(id).await?;
    Ok(Json(json!({ "message": "Message deleted successfully" })))
}
