pub mod cors;
pub mod handlers;
pub mod types;

pub use cors::OriginPolicy;

use crate::{Result, config::Config, provider::ProviderHandle, relay::Relay};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

pub fn create_router(relay: Relay, policy: OriginPolicy) -> Router {
    let app_state = handlers::AppState {
        relay: Arc::new(relay),
    };

    Router::new()
        .route("/", get(handlers::health))
        .route("/api/content", post(handlers::content))
        .fallback(handlers::not_found)
        .with_state(app_state)
        .layer(middleware::from_fn_with_state(
            Arc::new(policy),
            cors::apply_origin_policy,
        ))
        .layer(TraceLayer::new_for_http())
}

pub async fn run(config: Config) -> Result<()> {
    // The provider client is built exactly once, before the listener exists.
    let provider = ProviderHandle::from_config(&config.provider);
    let relay = Relay::new(provider);
    let policy = OriginPolicy::from_config(&config);

    info!("Origin policy mode: {:?}", config.server.mode);

    let app = create_router(relay, policy);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
