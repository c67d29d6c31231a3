//! Devnet Gateway - HTTP stand-in for the host runtime
//!
//! One `POST /api/v1/invoke` call is one transaction: the world-state mutex
//! is held for the full dispatch, so invocations execute single-threaded
//! against a consistent store, the way an endorsing peer schedules them.
//! The gateway adds nothing to contract semantics; it only decodes
//! requests, runs the dispatcher, and wraps results in the API envelope.

pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use anyhow::Context;
use axum::{
    Json, Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;

use crate::config::GatewayConfig;
use state::AppState;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(openapi::ApiDoc::openapi())
}

/// Start HTTP Gateway server
pub async fn run_server(config: &GatewayConfig, state: Arc<AppState>) -> anyhow::Result<()> {
    let app = Router::new()
        // Health check
        .route("/api/v1/health", get(handlers::health_check))
        // Contract surface
        .route("/api/v1/invoke", post(handlers::invoke))
        .route("/api/v1/assets", get(handlers::get_assets));

    // [SECURITY] Devnet routes - only compiled when 'devnet' feature is enabled.
    // Production builds MUST be compiled with `--no-default-features` to exclude this.
    #[cfg(feature = "devnet")]
    let app = app.route("/internal/devnet/reset", post(handlers::devnet_reset));

    let app = app
        .with_state(state)
        .route("/api-docs/openapi.json", get(openapi_json));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind gateway to {}", addr))?;

    tracing::info!("gateway listening on http://{}", addr);
    tracing::info!("OpenAPI document: http://{}/api-docs/openapi.json", addr);

    axum::serve(listener, app)
        .await
        .context("gateway server error")
}
