//! Cold-Chain Ledger devnet entry point
//!
//! Wires the pieces together for a local single-peer run:
//!
//! ```text
//! ┌──────────┐    ┌─────────────┐    ┌────────────┐    ┌──────────┐
//! │  Config  │───▶│ World State │───▶│ Dispatcher │◀───│ Gateway  │
//! │  (YAML)  │    │  (BTreeMap) │    │ (contract) │    │  (HTTP)  │
//! └──────────┘    └─────────────┘    └────────────┘    └──────────┘
//! ```
//!
//! In production the contract runs inside a host peer and none of this
//! file exists; the gateway is a stand-in that serializes invocations the
//! way the host's transaction scheduler would.

use std::sync::Arc;

use coldchain_ledger::config::AppConfig;
use coldchain_ledger::gateway::{self, state::AppState};
use coldchain_ledger::logging::init_logging;
use coldchain_ledger::mem_store::MemStateStore;
use coldchain_ledger::registry::AssetRegistry;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env);
    let _guard = init_logging(&config);

    tracing::info!(env = %env, "cold-chain ledger devnet starting");

    let mut world = MemStateStore::new();
    if config.devnet.seed_on_start {
        AssetRegistry::init_ledger(&mut world)?;
        tracing::info!("world state seeded on start (devnet.seed_on_start)");
    }

    let state = Arc::new(AppState::new(world));
    gateway::run_server(&config.gateway, state).await
}
