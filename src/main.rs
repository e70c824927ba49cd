use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use unyil_feed::{
    api::{create_router, AppState},
    config::Config,
    services::{InitialVideosLoader, ReqwestFetcher},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("unyil_feed=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let fetcher = ReqwestFetcher::new(config.request_timeout())?;
    let loader = InitialVideosLoader::new(Arc::new(fetcher), config.api_base.clone());

    let app = create_router(AppState::new(loader));

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    tracing::info!(
        addr = %config.bind_addr(),
        api_base = %config.api_base,
        "Server running"
    );
    axum::serve(listener, app).await?;

    Ok(())
}
