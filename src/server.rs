//! HTTP server initialization and runtime setup.
//!
//! Builds the Apollo client, wires services into [`AppState`], and runs the
//! Axum server until a shutdown signal arrives.

use crate::config::Config;
use crate::domain::resolvers::SearchListResolver;
use crate::infrastructure::apollo::ApolloClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let resolver: Arc<dyn SearchListResolver> = Arc::new(
        ApolloClient::new(
            config.apollo_api_key.clone(),
            &config.apollo_base_url,
            config.apollo_timeout(),
        )
        .context("Failed to create Apollo client")?,
    );

    let state = AppState::new(&config, resolver);
    let app = app_router(state, config.max_body_bytes);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
