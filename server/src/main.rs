mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "taskboard host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), routes::HostError> {
    let config = config::HostConfig::from_env()?;
    let app = routes::app()?;
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| routes::HostError::Bind(addr.to_string(), e))?;

    tracing::info!(%addr, "taskboard listening");
    axum::serve(listener, app).await.map_err(routes::HostError::Serve)
}
