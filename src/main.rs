use mood_journal::{api::ApiClient, router, AppState, Config};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env()?;
    let api = ApiClient::new(&config)?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    info!(api_url = %config.api_url, "using analysis service");
    if config.api_token.is_none() {
        info!("no ANALYSIS_API_TOKEN set; requests must carry their own bearer token");
    }

    let app = router(AppState::new(config, api));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
