use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::asset::Asset;

// ============================================================================
// Response envelope
// ============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response code: 0 for success, HTTP status for errors
    #[schema(example = 0)]
    pub code: i32,
    /// Response message
    #[schema(example = "ok")]
    pub msg: String,
    /// Response data (only present when code == 0)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Create success response
    pub fn success(data: T) -> Self {
        Self {
            code: 0,
            msg: "ok".to_string(),
            data: Some(data),
        }
    }

    /// Create error response
    pub fn error(code: i32, msg: impl Into<String>) -> Self {
        Self {
            code,
            msg: msg.into(),
            data: None,
        }
    }
}

// ============================================================================
// Invocation types
// ============================================================================

/// One contract invocation: a function name plus string arguments, the
/// shape a host runtime delivers to a contract.
#[derive(Debug, Deserialize, ToSchema)]
pub struct InvokeRequest {
    /// Contract function name, e.g. "CreateAsset"
    #[schema(example = "CreateAsset")]
    pub function: String,
    /// Positional string arguments
    #[serde(default)]
    pub args: Vec<String>,
}

/// Result of a dispatched invocation
#[derive(Debug, Serialize, ToSchema)]
pub struct InvokeData {
    /// Transaction id minted for this invocation (log correlation only;
    /// never written to the world state)
    pub tx_id: Uuid,
    /// Operation payload: Asset JSON, Asset array, boolean, or null for
    /// unit operations
    #[schema(value_type = Object)]
    pub payload: serde_json::Value,
}

// ============================================================================
// Query types
// ============================================================================

/// Asset as exposed by the query routes.
///
/// Deliberately a separate type from the core [`Asset`]: the API surface
/// uses lowercase field names and may evolve without touching the
/// canonical world-state encoding.
#[derive(Debug, Serialize, ToSchema)]
pub struct AssetApiData {
    #[schema(example = "Sensor1")]
    pub id: String,
    #[schema(example = "Sensor 1")]
    pub name: String,
    #[schema(example = 25.5)]
    pub temperature: f64,
    #[schema(example = "2024-04-26T10:00:00Z")]
    pub timestamp: String,
}

impl From<Asset> for AssetApiData {
    fn from(asset: Asset) -> Self {
        Self {
            id: asset.id,
            name: asset.name,
            temperature: asset.temperature,
            timestamp: asset.timestamp,
        }
    }
}
