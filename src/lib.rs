//! Cold-Chain Ledger - deterministic asset registry over a world state
//!
//! A smart-contract style module: identified cold-chain assets (id, label,
//! temperature reading, report time) kept in a transaction-scoped key-value
//! world state, with a lifecycle machine that replays identically on every
//! peer.
//!
//! # Modules
//!
//! - [`asset`] - Asset record and canonical JSON codec
//! - [`state_store`] - Transaction-scoped world-state abstraction
//! - [`mem_store`] - BTreeMap reference store (devnet + tests)
//! - [`error`] - Registry error types
//! - [`registry`] - The asset lifecycle state machine
//! - [`contract`] - Named-invocation dispatcher
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing setup
//! - [`gateway`] - Devnet HTTP harness standing in for the host runtime

pub mod asset;
pub mod config;
pub mod contract;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod mem_store;
pub mod registry;
pub mod state_store;

// Convenient re-exports at crate root
pub use asset::Asset;
pub use contract::{ContractError, dispatch};
pub use error::RegistryError;
pub use mem_store::MemStateStore;
pub use registry::AssetRegistry;
pub use state_store::{KvIter, KvPair, StateStore, StoreError};
