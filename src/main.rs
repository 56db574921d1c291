use anyhow::Context;
use foundation_site::app;
use foundation_site::state::{AppConfig, AppState};
use std::net::SocketAddr;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Log initialized");

    let config = AppConfig::from_env();

    // トークンが無くても起動する (ウィジェット側がプレースホルダーに切り替える)
    if config.access_token().is_none() {
        tracing::warn!(
            "INSTAGRAM_ACCESS_TOKEN is not set. /api/instagram will report a configuration error."
        );
    }
    if !config.cache_ttl.is_zero() {
        tracing::info!("Instagram feed cache enabled (TTL {:?})", config.cache_ttl);
    }
    tracing::info!("Instagram API: {}", config.instagram_api_url);

    let http_client = reqwest::Client::builder()
        .user_agent("FoundationSite/1.0")
        .build()
        .context("Failed to build HTTP client")?;

    let app_state = AppState::new(config, http_client);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    tracing::info!("Feed server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let router = app(app_state);
    axum::serve(listener, router).await?;

    Ok(())
}
