use anyhow::{Context, Result};
use tracing::info;

use storefront::app_system::{setup_tracing, Config, OrderSystem};
use storefront::domain::default_catalog;
use storefront::http::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Setup tracing once for the entire application
    setup_tracing();

    let config = Config::init().context("Failed to load configuration")?;
    info!(addr = %config.bind_addr(), "Starting storefront");

    let system = OrderSystem::new(&config, default_catalog()).context("Failed to seed catalog")?;
    let state = AppState::new(&system);

    http::serve(&config, state).await?;

    system.shutdown().await.context("Actor system did not stop cleanly")?;

    info!("Storefront stopped");
    Ok(())
}
