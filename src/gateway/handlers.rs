//! Gateway handlers
//!
//! Each handler locks the world state, runs at most one contract
//! operation, and converts the outcome into the API envelope. Registry
//! error strings pass through untouched; the numeric code is the mapped
//! HTTP status.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::{Json, extract::State, http::StatusCode};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::contract::dispatch;
use crate::registry::AssetRegistry;

use super::state::AppState;
use super::types::{ApiResponse, AssetApiData, InvokeData, InvokeRequest};

/// Health check response data
#[derive(serde::Serialize, ToSchema)]
pub struct HealthResponse {
    /// Crate version
    #[schema(example = "0.1.0")]
    pub version: String,
    /// Server timestamp in milliseconds
    #[schema(example = 1714125600000_u64)]
    pub timestamp_ms: u64,
    /// Live keys in the world state
    #[schema(example = 3)]
    pub asset_count: usize,
}

/// Health check endpoint
///
/// - Healthy: 200 OK + {code: 0, data: {version, timestamp_ms, asset_count}}
/// - Unhealthy (world state lock poisoned): 503 Service Unavailable
#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service healthy", body = HealthResponse, content_type = "application/json"),
        (status = 503, description = "Service unavailable")
    ),
    tag = "System"
)]
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ApiResponse<HealthResponse>>) {
    let now_ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    match state.world.lock() {
        Ok(world) => (
            StatusCode::OK,
            Json(ApiResponse::success(HealthResponse {
                version: env!("CARGO_PKG_VERSION").to_string(),
                timestamp_ms: now_ms,
                asset_count: world.len(),
            })),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiResponse::error(503, "unavailable")),
        ),
    }
}

/// Execute one contract invocation as one transaction
///
/// The request carries the function name and positional string arguments
/// exactly as a host runtime would deliver them. The response payload is
/// the operation's JSON result, or null for unit operations.
#[utoipa::path(
    post,
    path = "/api/v1/invoke",
    request_body = InvokeRequest,
    responses(
        (status = 200, description = "Invocation committed", body = InvokeData, content_type = "application/json"),
        (status = 400, description = "Unknown function or wrong argument count"),
        (status = 404, description = "Asset does not exist"),
        (status = 409, description = "Asset already exists"),
        (status = 500, description = "World state or codec failure")
    ),
    tag = "Contract"
)]
pub async fn invoke(
    State(state): State<Arc<AppState>>,
    Json(req): Json<InvokeRequest>,
) -> (StatusCode, Json<ApiResponse<InvokeData>>) {
    let tx_id = Uuid::new_v4();

    let mut world = match state.world.lock() {
        Ok(guard) => guard,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(500, "world state lock poisoned")),
            );
        }
    };

    tracing::debug!(%tx_id, function = %req.function, args = req.args.len(), "invoke");

    match dispatch(&mut *world, &req.function, &req.args) {
        Ok(payload) => {
            let payload = if payload.is_empty() {
                serde_json::Value::Null
            } else {
                // The dispatcher only ever emits valid JSON payloads.
                serde_json::from_slice(&payload).unwrap_or(serde_json::Value::Null)
            };
            (
                StatusCode::OK,
                Json(ApiResponse::success(InvokeData { tx_id, payload })),
            )
        }
        Err(err) => {
            tracing::warn!(%tx_id, function = %req.function, code = err.code(), error = %err, "invoke rejected");
            let status = StatusCode::from_u16(err.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (
                status,
                Json(ApiResponse::error(err.http_status() as i32, err.to_string())),
            )
        }
    }
}

/// List every asset in ascending id order
///
/// Convenience mirror of the `GetAllAssets` invocation.
#[utoipa::path(
    get,
    path = "/api/v1/assets",
    responses(
        (status = 200, description = "All registered assets", body = [AssetApiData], content_type = "application/json"),
        (status = 500, description = "World state or codec failure")
    ),
    tag = "Query"
)]
pub async fn get_assets(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ApiResponse<Vec<AssetApiData>>>) {
    let world = match state.world.lock() {
        Ok(guard) => guard,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(500, "world state lock poisoned")),
            );
        }
    };

    match AssetRegistry::get_all_assets(&*world) {
        Ok(assets) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                assets.into_iter().map(AssetApiData::from).collect(),
            )),
        ),
        Err(err) => {
            let status = StatusCode::from_u16(err.http_status())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (
                status,
                Json(ApiResponse::error(err.http_status() as i32, err.to_string())),
            )
        }
    }
}

/// Wipe the world state. Devnet builds only.
#[cfg(feature = "devnet")]
pub async fn devnet_reset(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<ApiResponse<()>>) {
    let mut world = match state.world.lock() {
        Ok(guard) => guard,
        Err(_) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(500, "world state lock poisoned")),
            );
        }
    };

    world.clear();
    tracing::info!("devnet reset: world state cleared");
    (StatusCode::OK, Json(ApiResponse::success(())))
}
