//! OpenAPI Documentation
//!
//! Auto-generated OpenAPI 3.0 document for the devnet gateway, served at
//! `/api-docs/openapi.json`.

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::{AssetApiData, InvokeData, InvokeRequest};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Cold-Chain Ledger Devnet API",
        version = "0.1.0",
        description = "Local harness for the cold-chain asset contract: named invocations against an in-memory world state.",
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::gateway::handlers::invoke,
        crate::gateway::handlers::get_assets,
    ),
    components(
        schemas(
            HealthResponse,
            InvokeRequest,
            InvokeData,
            AssetApiData,
        )
    ),
    tags(
        (name = "Contract", description = "Named contract invocations routed to the asset registry"),
        (name = "Query", description = "Convenience world-state queries"),
        (name = "System", description = "Health checks and system info")
    )
)]
pub struct ApiDoc;
