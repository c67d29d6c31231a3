//! Registry Error Types
//!
//! Every registry operation returns one of these. The message strings are
//! part of the contract surface: hosts and clients match on them, and every
//! replica must produce the same text for the same failure.

use thiserror::Error;

use crate::state_store::StoreError;

/// Registry error types
///
/// Store failures keep their operation-specific wrap (read vs put) where the
/// operation wraps them; everything else passes through untouched.
#[derive(Error, Debug)]
pub enum RegistryError {
    // === Lifecycle preconditions ===
    #[error("the asset {0} already exists")]
    AlreadyExists(String),

    #[error("the asset {0} does not exist")]
    NotFound(String),

    // === Wrapped store failures ===
    #[error("failed to read from world state: {0}")]
    WorldStateRead(#[source] StoreError),

    #[error("failed to put to world state: {0}")]
    WorldStatePut(#[source] StoreError),

    // === Unwrapped passthrough ===
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Codec(#[from] serde_json::Error),
}

impl RegistryError {
    /// Stable error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            RegistryError::AlreadyExists(_) => "ASSET_ALREADY_EXISTS",
            RegistryError::NotFound(_) => "ASSET_NOT_FOUND",
            RegistryError::WorldStateRead(_) => "WORLD_STATE_READ",
            RegistryError::WorldStatePut(_) => "WORLD_STATE_PUT",
            RegistryError::Store(_) => "WORLD_STATE_ERROR",
            RegistryError::Codec(_) => "CODEC_ERROR",
        }
    }

    /// HTTP status suggestion for the gateway
    pub fn http_status(&self) -> u16 {
        match self {
            RegistryError::AlreadyExists(_) => 409,
            RegistryError::NotFound(_) => 404,
            RegistryError::WorldStateRead(_)
            | RegistryError::WorldStatePut(_)
            | RegistryError::Store(_)
            | RegistryError::Codec(_) => 500,
        }
    }
}
