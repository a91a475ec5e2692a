//! HTTP surface: routes, JSON views, and error mapping.

pub mod error;
pub mod handlers;
pub mod state;

use std::path::Path;

use anyhow::{Context, Result};
use axum::{routing::get, routing::post, Router};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::app_system::Config;

pub use error::HttpError;
pub use state::AppState;

pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/agregarUsuario", post(handlers::register_user))
        .route(
            "/inventario",
            get(handlers::show_inventory).post(handlers::place_order),
        )
        .route("/detallePedido", get(handlers::order_detail))
        .route("/pago", get(handlers::pay_order))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve(config: &Config, state: AppState) -> Result<()> {
    let app = build_router(state, &config.static_dir);

    let listener = TcpListener::bind(config.bind_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr()))?;
    info!(addr = %listener.local_addr()?, "Storefront listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("HTTP server stopped");
    Ok(())
}

pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
