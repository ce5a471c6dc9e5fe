use anyhow::Context;
use tracing_subscriber::EnvFilter;

use meeting_invoice::shell::config::AppConfig;
use meeting_invoice::shell::http::router;
use meeting_invoice::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let state = AppState::from_config(&config);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, "meeting invoice service listening");

    axum::serve(listener, router(state)).await?;
    Ok(())
}
