use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use movies_feed::app;
use movies_feed::config::settings::AppConfig;
use movies_feed::infrastructure::connectivity::monitor::ConnectivityMonitor;
use movies_feed::infrastructure::tmdb::client::TmdbClient;
use movies_feed::modules::movie::repository::{CatalogRepository, RepositorySettings};
use movies_feed::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("movies_feed=info,tower_http=info")),
        )
        .init();

    info!("Starting movies feed...");

    let config = AppConfig::new().context("TMDB_API_KEY must be set")?;

    // Assume online until the first probe says otherwise
    let connectivity = ConnectivityMonitor::new(true);
    let client = TmdbClient::new(&config, connectivity.clone())?;
    let _probe = connectivity.spawn_probe(
        client.http().clone(),
        client.base_url().clone(),
        Duration::from_secs(config.connectivity_probe_secs.max(1)),
    );

    let repository = CatalogRepository::new(
        Arc::new(client),
        RepositorySettings {
            video_embed_base_url: config.video_embed_base_url.clone(),
            search_page_cap: config.search_page_cap,
        },
    );

    let state = AppState::new(config.clone(), repository);
    let _connectivity_watch = state.feed.clone().watch_connectivity();

    let app = app::create_app(state);

    let addr = format!("0.0.0.0:{}", config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server running on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
