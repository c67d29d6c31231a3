//! StateStore - transaction-scoped world-state abstraction
//!
//! The registry never talks to a concrete database. Every operation runs
//! against this trait, which models the key->bytes world state a host
//! runtime hands to a smart contract for the duration of one transaction:
//! - point `get` / `put` / `delete`
//! - `range_scan` over a half-open lexicographic key range
//!
//! Store failures are opaque to the registry; it propagates them without
//! inspecting the cause.

use thiserror::Error;

/// Opaque world-state failure.
///
/// The host owns the real cause (I/O, snapshot abort, ...). The registry
/// only forwards the message, so this is a plain string wrapper.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One key/value entry yielded by a range scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KvPair {
    pub key: String,
    pub value: Vec<u8>,
}

/// Owned range-scan iterator.
///
/// Yields pairs in ascending lexicographic key order. The iterator owns a
/// snapshot taken at scan start, so it does not borrow the store: callers
/// may keep writing (or deleting) through the store while draining it, and
/// the visible key sequence stays fixed. Dropping the iterator releases it,
/// on every exit path including `?`-propagated errors.
pub type KvIter = Box<dyn Iterator<Item = Result<KvPair, StoreError>> + Send>;

/// Transaction-scoped key->bytes store with lexicographic range iteration.
///
/// A store handle is owned exclusively by the enclosing transaction; there
/// is no cross-transaction sharing and no interior concurrency. Any method
/// may block synchronously on host I/O.
pub trait StateStore: Send {
    /// Point lookup. `None` means the key is absent, which is distinct
    /// from an empty value.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Unconditional write.
    fn put(&mut self, key: &str, value: Vec<u8>) -> Result<(), StoreError>;

    /// Unconditional remove. Deleting an absent key is not an error.
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;

    /// Scan the half-open range `[start_key, end_key)`. An empty bound
    /// means unbounded on that side, so `range_scan("", "")` walks the
    /// whole world state.
    fn range_scan(&self, start_key: &str, end_key: &str) -> Result<KvIter, StoreError>;
}
