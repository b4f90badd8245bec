//! Storefront API server binary

use anyhow::Result;
use storefront::config::Config;
use storefront::server::ServerBuilder;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("storefront=debug,tower_http=debug")),
        )
        .init();

    let config = Config::from_env();
    tracing::info!(
        environment = config.environment.as_str(),
        port = config.port,
        "starting storefront API"
    );

    ServerBuilder::new()
        .with_config(config)
        .with_seed_catalog()
        .serve()
        .await
}
