use std::sync::{Arc, Mutex, MutexGuard};

use super::snapshot::Snapshot;

/// Single-slot hand-off between the sampler thread and the render loop.
///
/// Last value wins: the sampler overwrites the slot each cycle and the
/// renderer clones it out, so a slow reader only ever misses intermediate
/// snapshots, never sees a partial one.
#[derive(Clone, Default)]
pub struct SnapshotStore {
    slot: Arc<Mutex<Snapshot>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, snapshot: Snapshot) {
        *self.lock() = snapshot;
    }

    pub fn read(&self) -> Snapshot {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Snapshot> {
        // The slot always holds a complete snapshot, so a poisoned lock is
        // recoverable rather than fatal.
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
