use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    dto::blog_dto::BlogPayload,
    error::Result,
    models::blog::Blog,
    AppState,
};

#[utoipa::path(
    get,
    path = "/api/blogs",
    responses(
        (status = 200, description = "Blog posts newest-first", body = Json<Vec<Blog>>)
    )
)]
#[axum::debug_handler]
pub async fn list_blogs(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let blogs = state.blog_service.list_all().await?;
    Ok(Json(blogs))
}

#[utoipa::path(
    get,
    path = "/api/blogs/{id}",
    params(
        ("id" = Uuid, Path, description = "Blog ID")
    ),
    responses(
        (status = 200, description = "Blog found", body = Json<Blog>),
        (status = 404, description = "Blog not found")
    )
)]
#[axum::debug_handler]
pub async fn get_blog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let blog = state.blog_service.get_by_id(id).await?;
    Ok(Json(blog))
}

#[utoipa::path(
    post,
    path = "/api/admin/blogs",
    request_body = BlogPayload,
    responses(
        (status = 201, description = "Blog created", body = Json<Blog>),
        (status = 400, description = "Invalid payload"),
        (status = 401, description = "Missing or invalid token")
    )
)]
#[axum::debug_handler]
pub async fn create_blog(
    State(state): State<AppState>,
    Json(payload): Json<BlogPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let blog = state.blog_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(blog)))
}

#[utoipa::path(
    put,
    path = "/api/admin/blogs/{id}",
    params(
        ("id" = Uuid, Path, description = "Blog ID")
    ),
    request_body = BlogPayload,
    responses(
        (status = 200, description = "Blog updated", body = Json<Blog>),
        (status = 400, description = "Invalid payload"),
        (status = 404, description = "Blog not found")
    )
)]
#[axum::debug_handler]
pub async fn update_blog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<BlogPayload>,
) -> Result<impl IntoResponse> {
    payload.validate()?;
    let blog = state.blog_service.update(id, payload).await?;
    Ok(Json(blog))
}

#[utoipa::path(
    delete,
    path = "/api/admin/blogs/{id}",
    params(
        ("id" = Uuid, Path, description = "Blog ID")
    ),
    responses(
        (status = 204, description = "Blog deleted"),
        (status = 404, description = "Blog not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_blog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    state.blog_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
