//! Asset Registry - the world-state lifecycle machine
//!
//! The registry handles:
//! 1. Bootstrap seeding of the ledger
//! 2. Create / read / exists / delete for single assets
//! 3. Whole-range enumeration and bulk delete
//!
//! Every operation runs inside one host transaction and is a pure function
//! over `(StateStore, args)` - the registry itself carries no state, so two
//! replicas replaying the same invocation sequence against the same prior
//! world state end up byte-identical.
//!
//! # Per-asset lifecycle
//!
//! ```text
//!            create_asset           delete_asset / delete_all_assets
//!  ABSENT ───────────────▶ PRESENT ───────────────────────────────▶ ABSENT
//! ```
//!
//! `init_ledger` writes unconditionally and is the only path that replaces
//! a PRESENT record. There is no in-place mutation operation.

use tracing::{debug, info};

use crate::asset::Asset;
use crate::error::RegistryError;
use crate::state_store::StateStore;

/// Ledger bootstrap records, written in this order.
fn seed_assets() -> [Asset; 3] {
    [
        Asset {
            id: "Sensor1".to_string(),
            name: "Sensor 1".to_string(),
            temperature: 25.5,
            timestamp: "2024-04-26T10:00:00Z".to_string(),
        },
        Asset {
            id: "Sensor2".to_string(),
            name: "Sensor 2".to_string(),
            temperature: 28.0,
            timestamp: "2024-04-26T10:01:00Z".to_string(),
        },
        Asset {
            id: "Sensor3".to_string(),
            name: "Sensor 3".to_string(),
            temperature: 24.8,
            timestamp: "2024-04-26T10:02:00Z".to_string(),
        },
    ]
}

/// Asset registry operating on a transaction-scoped store
pub struct AssetRegistry;

impl AssetRegistry {
    /// Seed the ledger with the predefined sensors.
    ///
    /// Writes are unconditional: re-initializing a non-empty ledger
    /// overwrites the seed keys and leaves everything else alone, so the
    /// bootstrap is safe to replay.
    pub fn init_ledger(store: &mut dyn StateStore) -> Result<(), RegistryError> {
        let seeds = seed_assets();
        let count = seeds.len();
        for asset in seeds {
            let bytes = asset.encode()?;
            store
                .put(&asset.id, bytes)
                .map_err(RegistryError::WorldStatePut)?;
        }
        info!(count, "ledger seeded");
        Ok(())
    }

    /// Register a new asset with identity only; temperature and timestamp
    /// stay unset until a reading is recorded out-of-band.
    ///
    /// The exists-check and the write are two store calls; the host runs
    /// the transaction single-threaded against one snapshot, which is what
    /// makes the pair safe without a lock.
    pub fn create_asset(
        store: &mut dyn StateStore,
        id: &str,
        name: &str,
    ) -> Result<(), RegistryError> {
        if Self::asset_exists(&*store, id)? {
            return Err(RegistryError::AlreadyExists(id.to_string()));
        }

        let asset = Asset::new(id, name);
        let bytes = asset.encode()?;
        store.put(id, bytes)?;
        debug!(id, "asset created");
        Ok(())
    }

    /// Fetch and decode one asset.
    pub fn read_asset(store: &dyn StateStore, id: &str) -> Result<Asset, RegistryError> {
        let bytes = store.get(id).map_err(RegistryError::WorldStateRead)?;
        let bytes = bytes.ok_or_else(|| RegistryError::NotFound(id.to_string()))?;
        Ok(Asset::decode(&bytes)?)
    }

    /// Presence check by key. Never decodes the value.
    pub fn asset_exists(store: &dyn StateStore, id: &str) -> Result<bool, RegistryError> {
        let bytes = store.get(id).map_err(RegistryError::WorldStateRead)?;
        Ok(bytes.is_some())
    }

    /// Remove one asset. Absent keys are an error.
    pub fn delete_asset(store: &mut dyn StateStore, id: &str) -> Result<(), RegistryError> {
        if !Self::asset_exists(&*store, id)? {
            return Err(RegistryError::NotFound(id.to_string()));
        }
        store.delete(id)?;
        debug!(id, "asset deleted");
        Ok(())
    }

    /// Remove every key in the world state.
    ///
    /// Keys are deleted as scanned, values never decoded - a corrupt record
    /// must not block a bulk wipe. The scan iterates a snapshot taken at
    /// scan start, so the deletes cannot perturb the key sequence. First
    /// store error aborts the walk.
    pub fn delete_all_assets(store: &mut dyn StateStore) -> Result<(), RegistryError> {
        let iter = store.range_scan("", "")?;
        let mut deleted = 0usize;
        for pair in iter {
            let pair = pair?;
            store.delete(&pair.key)?;
            deleted += 1;
        }
        info!(deleted, "world state cleared");
        Ok(())
    }

    /// Enumerate every asset in ascending key order.
    ///
    /// A value that fails to decode aborts the whole enumeration.
    pub fn get_all_assets(store: &dyn StateStore) -> Result<Vec<Asset>, RegistryError> {
        let mut assets = Vec::new();
        for pair in store.range_scan("", "")? {
            let pair = pair?;
            assets.push(Asset::decode(&pair.value)?);
        }
        Ok(assets)
    }
}
