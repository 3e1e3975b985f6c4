use axum::http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};

/// Locked to the site origin when CORS_ORIGIN is configured, permissive
/// otherwise (local development against the Vite dev server).
pub fn cors_layer(origin: Option<&str>) -> CorsLayer {
    match origin.and_then(|o| o.parse::<HeaderValue>().ok()) {
        Some(value) => CorsLayer::new()
            .allow_methods(Any)
            .allow_headers(Any)
            .allow_origin(value),
        None => CorsLayer::permissive(),
    }
}
