use anyhow::Context;
use dotenvy::dotenv;
use savely::router::init_router;
use savely::state::init_app_state;
use savely_config::{LogConfig, ServerConfig};
use savely_observability::init_tracing;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    init_tracing(&LogConfig::from_env())?;

    let server_config = ServerConfig::from_env();
    let listen_addr = server_config.listen_addr();

    let state = init_app_state();
    let app = init_router(state);

    let listener = tokio::net::TcpListener::bind(&listen_addr)
        .await
        .with_context(|| format!("failed to bind {listen_addr}"))?;

    info!(listen_address = %listen_addr, "starting the HTTP server");
    info!("swagger UI available at http://{listen_addr}/swagger-ui");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
