pub mod client;
pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use axum::{
    routing::{get, patch, post, put},
    Router,
};
use sqlx::PgPool;
use tower_http::trace::TraceLayer;

use crate::services::{
    application_service::ApplicationService, auth_service::AuthService, blog_service::BlogService,
    contact_service::ContactService, job_service::JobService,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub auth_service: AuthService,
    pub job_service: JobService,
    pub application_service: ApplicationService,
    pub contact_service: ContactService,
    pub blog_service: BlogService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let auth_service = AuthService::new(pool.clone());
        let job_service = JobService::new(pool.clone());
        let application_service = ApplicationService::new(pool.clone());
        let contact_service = ContactService::new(pool.clone());
        let blog_service = BlogService::new(pool.clone());

        Self {
            pool,
            auth_service,
            job_service,
            application_service,
            contact_service,
            blog_service,
        }
    }
}

/// Full application router: a public group and an `/api/admin` group behind
/// the bearer-token middleware, each with its own rate limit.
pub fn app_router(state: AppState, public_rps: u32, admin_rps: u32) -> Router {
    let public_api = Router::new()
        .route("/api/auth/login", post(routes::auth::login))
        .route("/api/jobs", get(routes::job::list_public_jobs))
        .route("/api/jobs/:id", get(routes::job::get_job))
        .route(
            "/api/applications/apply",
            post(routes::application::apply_for_job),
        )
        .route("/api/contact", post(routes::contact::send_message))
        .route("/api/blogs", get(routes::blog::list_blogs))
        .route("/api/blogs/:id", get(routes::blog::get_blog))
        .layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::new_rps_state(public_rps),
            middleware::rate_limit::rps_middleware,
        ));

    let admin_api = Router::new()
        .route(
            "/api/admin/jobs",
            get(routes::job::list_admin_jobs).post(routes::job::create_job),
        )
        .route(
            "/api/admin/jobs/:id",
            put(routes::job::update_job).delete(routes::job::delete_job),
        )
        .route(
            "/api/admin/applications",
            get(routes::application::list_applications),
        )
        .route(
            "/api/admin/applications/:id/status",
            patch(routes::application::update_application_status),
        )
        .route("/api/admin/messages", get(routes::contact::list_messages))
        .route(
            "/api/admin/messages/:id/read",
            patch(routes::contact::mark_message_read),
        )
        .route(
            "/api/admin/messages/:id",
            axum::routing::delete(routes::contact::delete_message),
        )
        .route("/api/admin/blogs", post(routes::blog::create_blog))
        .route(
            "/api/admin/blogs/:id",
            put(routes::blog::update_blog).delete(routes::blog::delete_blog),
        )
        .route(
            "/api/admin/dashboard",
            get(routes::admin::get_dashboard_stats),
        )
        .route_layer(axum::middleware::from_fn(
            middleware::auth::require_admin_auth,
        ))
        .layer(axum::middleware::from_fn_with_state(
            middleware::rate_limit::new_rps_state(admin_rps),
            middleware::rate_limit::rps_middleware,
        ));

    Router::new()
        .route("/health", get(routes::health::health))
        .merge(public_api)
        .merge(admin_api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
