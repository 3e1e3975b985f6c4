use std::net::SocketAddr;

use sunrobotics_backend::{
    app_router,
    config::{get_config, init_config},
    database::pool::create_pool,
    middleware::cors::cors_layer,
    AppState,
};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    init_config()?;
    let config = get_config();

    let pool = create_pool().await?;
    sqlx::migrate!("./migrations").run(&pool).await?;

    let app_state = AppState::new(pool);
    app_state
        .auth_service
        .ensure_admin_user(&config.admin_username, &config.admin_password)
        .await?;

    let app = app_router(app_state, config.public_rps, config.admin_rps)
        .layer(cors_layer(config.cors_origin.as_deref()));

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
