use std::sync::{Arc, Mutex};

use crate::mem_store::MemStateStore;

/// Gateway application state (shared)
#[derive(Clone)]
pub struct AppState {
    /// The ledger's world state. One lock hold = one transaction; the
    /// registry itself never sees the lock.
    pub world: Arc<Mutex<MemStateStore>>,
}

impl AppState {
    pub fn new(world: MemStateStore) -> Self {
        Self {
            world: Arc::new(Mutex::new(world)),
        }
    }
}
