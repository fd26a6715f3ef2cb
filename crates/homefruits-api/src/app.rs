//! Application builder: wires router, layers and state into an Axum app.

use std::time::Duration;

use axum::Router;
use axum::extract::{MatchedPath, Request};
use tokio::sync::watch;
use tower_http::trace::TraceLayer;
use tracing::{Span, info, info_span, warn};

use homefruits_core::config::AppConfig;
use homefruits_core::error::AppError;
use homefruits_database::Stores;

use crate::middleware::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and layers.
pub fn build_app(state: AppState) -> Router {
    let cors = build_cors_layer(&state.config.server.cors);
    build_router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
}

/// Request span keyed by the route template, never the raw URI.
///
/// Path segments such as `/admin/revoke/{token}` carry credentials, so only
/// the matched template is recorded. Unrouted requests get no path at all.
fn request_span(req: &Request) -> Span {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(MatchedPath::as_str)
        .unwrap_or("unmatched");

    info_span!(
        "http_request",
        method = %req.method(),
        route = %route,
        version = ?req.version(),
    )
}

/// Runs the HomeFruits server until Ctrl+C.
///
/// In-flight requests get `server.shutdown_grace_seconds` to finish after
/// the signal; the server is dropped after that.
pub async fn run_server(config: AppConfig, stores: Stores) -> Result<(), AppError> {
    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    info!(backend = stores.backend_name(), "Building application state");
    let app = build_app(AppState::new(config, stores));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!(address = %addr, "HomeFruits server listening");

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        info!("Shutdown signal received, draining requests");
        let _ = shutdown_tx.send(true);
    });

    tokio::select! {
        result = async { server.await } => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
        }
        _ = async {
            let _ = shutdown_rx.wait_for(|stopping| *stopping).await;
            tokio::time::sleep(grace).await;
        } => {
            warn!(grace_seconds = grace.as_secs(), "Shutdown grace period elapsed, dropping connections");
        }
    }

    info!("HomeFruits server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
}
