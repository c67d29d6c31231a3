//! MemStateStore - BTreeMap-backed world state
//!
//! Reference `StateStore` used by the devnet gateway and the test suite.
//! A `BTreeMap` keeps keys in lexicographic order, which is exactly the
//! iteration order range scans must expose.
//!
//! # Snapshot semantics
//!
//! `range_scan` collects the matching pairs *at scan start* and returns an
//! owned iterator over that snapshot. Writes and deletes issued while the
//! iterator is alive do not change the yielded sequence. Bulk delete walks
//! a scan and deletes every key it sees; without the snapshot the walk
//! would skip neighbors of removed keys.

use std::collections::BTreeMap;
use std::ops::Bound;

use crate::state_store::{KvIter, KvPair, StateStore, StoreError};

/// In-memory world state for one ledger.
///
/// The gateway serializes transactions against it with a mutex, so the
/// store itself needs no interior locking.
#[derive(Debug, Default)]
pub struct MemStateStore {
    state: BTreeMap<String, Vec<u8>>,
}

impl MemStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live keys.
    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Drop every key. Devnet reset only; a real host never offers this.
    pub fn clear(&mut self) {
        self.state.clear();
    }
}

impl StateStore for MemStateStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.state.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError> {
        self.state.insert(key.to_string(), value);
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), StoreError> {
        self.state.remove(key);
        Ok(())
    }

    fn range_scan(&self, start_key: &str, end_key: &str) -> Result<KvIter, StoreError> {
        let lower: Bound<&str> = if start_key.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start_key)
        };
        let upper: Bound<&str> = if end_key.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end_key)
        };

        // Snapshot at scan start; see module docs.
        let pairs: Vec<KvPair> = self
            .state
            .range::<str, _>((lower, upper))
            .map(|(key, value)| KvPair {
                key: key.clone(),
                value: value.clone(),
            })
            .collect();

        Ok(Box::new(pairs.into_iter().map(Ok)))
    }
}
