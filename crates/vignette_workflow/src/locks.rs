//! Per-project mutual exclusion for read-modify-write sequences.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};
use vignette_core::ProjectId;

/// Lazily created async lock per project id.
///
/// Repeated lookups for one id share the same lock. Entries nobody holds or
/// waits on are pruned on the next acquisition. Process-local only.
#[derive(Debug, Default, Clone)]
pub struct ProjectLocks {
    locks: Arc<Mutex<HashMap<ProjectId, Arc<AsyncMutex<()>>>>>,
}

impl ProjectLocks {
    /// Create an empty lock table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `id`; released when the guard drops.
    pub async fn acquire(&self, id: &ProjectId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock();
            locks.retain(|key, lock| key == id || Arc::strong_count(lock) > 1);
            locks.entry(*id).or_default().clone()
        };
        lock.lock_owned().await
    }

    /// Number of tracked projects.
    pub fn len(&self) -> usize {
        self.locks.lock().len()
    }

    /// True when no project lock is tracked.
    pub fn is_empty(&self) -> bool {
        self.locks.lock().is_empty()
    }
}
