// ============================================================
// Layer 4 — Dataset Registry
// ============================================================
// Process-wide cache of loaded datasets, keyed by name.
//
//   get("iris.csv")
//       │
//       ├── slot exists & filled   → return the cached Arc (hit)
//       │
//       ├── slot exists & empty    → another request is loading:
//       │                            wait on the slot lock, then
//       │                            return what it stored
//       │
//       └── no slot                → check the name is in storage,
//                                    create a slot, load + shuffle
//                                    while holding the slot lock
//
// Locking:
//   - `entries` (registry-wide) is held only for map lookups and
//     inserts, never across file I/O, and never taken while a
//     slot lock is held
//   - each Slot has its own lock, held for the whole
//     load-and-store sequence of that one name
//
// So two requests for different names never wait on each
// other's I/O, two requests for the same cold name load it
// exactly once, and nobody can observe a half-built entry.
//
// The cache holds at most `capacity` loaded datasets. Eviction
// (least recently used first) happens only once a load has
// succeeded, so a failing request never pushes a good dataset
// out. Empty slots of in-flight loads do not count.
//
// Reference: parking_lot crate documentation
//            Rust Book §16 (Shared-State Concurrency)

use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::dataset::Dataset;
use crate::domain::error::{CoreError, CoreResult};
use crate::domain::traits::DatasetSource;

/// Default number of datasets kept in memory
pub const DEFAULT_CAPACITY: usize = 16;

/// One cache cell; `None` until the first successful load.
#[derive(Default)]
struct Slot {
    dataset: Mutex<Option<Arc<Dataset>>>,
}

struct Entry {
    slot:   Arc<Slot>,
    /// Access stamp for LRU ordering
    stamp:  u64,
    filled: bool,
}

/// Slot map plus the access clock used for LRU eviction.
#[derive(Default)]
struct Entries {
    slots: HashMap<String, Entry>,
    clock: u64,
}

impl Entries {
    fn tick(&mut self) -> u64 {
        self.clock += 1;
        self.clock
    }

    fn touch(&mut self, name: &str) -> Option<Arc<Slot>> {
        let stamp = self.tick();
        self.slots.get_mut(name).map(|entry| {
            entry.stamp = stamp;
            Arc::clone(&entry.slot)
        })
    }

    /// Evict filled entries, oldest first, until at most `capacity`
    /// remain. `keep` is never chosen.
    fn evict_over(&mut self, capacity: usize, keep: &str) {
        while self.slots.values().filter(|e| e.filled).count() > capacity {
            let oldest = self
                .slots
                .iter()
                .filter(|(name, e)| e.filled && name.as_str() != keep)
                .min_by_key(|(_, e)| e.stamp)
                .map(|(name, _)| name.clone());
            let Some(name) = oldest else { break };
            tracing::info!("Evicting data set '{}' from cache", name);
            self.slots.remove(&name);
        }
    }
}

/// Bounded, thread-safe dataset cache in front of a DatasetSource.
pub struct DatasetRegistry {
    source:   Box<dyn DatasetSource>,
    capacity: usize,
    entries:  Mutex<Entries>,
}

impl DatasetRegistry {
    /// Create a registry holding at most `capacity` datasets (minimum 1).
    pub fn new(source: impl DatasetSource + 'static, capacity: usize) -> Self {
        Self {
            source:   Box::new(source),
            capacity: capacity.max(1),
            entries:  Mutex::new(Entries::default()),
        }
    }

    /// Dataset names currently available in storage.
    pub fn list(&self) -> CoreResult<BTreeSet<String>> {
        self.source.list()
    }

    /// Return the cached dataset, loading it on first use.
    pub fn get(&self, name: &str) -> CoreResult<Arc<Dataset>> {
        let slot = self.slot_for(name)?;

        // Per-name lock: concurrent callers for this name queue here
        let mut cell = slot.dataset.lock();
        if let Some(dataset) = cell.as_ref() {
            tracing::debug!("Data set cache hit: '{}'", name);
            return Ok(Arc::clone(dataset));
        }

        tracing::debug!("Data set cache miss: '{}'", name);
        let loaded = self.source.load(name).map(Arc::new);
        if let Ok(dataset) = &loaded {
            *cell = Some(Arc::clone(dataset));
        }
        drop(cell);

        match &loaded {
            Ok(_) => self.mark_filled(name, &slot),
            Err(_) => self.discard_empty(name, &slot),
        }
        loaded
    }

    /// Find or create the slot for `name`.
    /// Unknown names are rejected before a slot is created, so a
    /// stream of bad names never touches the cache.
    fn slot_for(&self, name: &str) -> CoreResult<Arc<Slot>> {
        if let Some(slot) = self.entries.lock().touch(name) {
            return Ok(slot);
        }

        if !self.source.list()?.contains(name) {
            tracing::warn!("Rejected request for unknown data set '{}'", name);
            return Err(CoreError::DatasetNotFound(name.to_string()));
        }

        let mut entries = self.entries.lock();
        // Another caller may have created the slot while we listed storage
        if let Some(slot) = entries.touch(name) {
            return Ok(slot);
        }
        let slot  = Arc::new(Slot::default());
        let stamp = entries.clock;
        entries.slots.insert(
            name.to_string(),
            Entry { slot: Arc::clone(&slot), stamp, filled: false },
        );
        Ok(slot)
    }

    /// Count a freshly stored dataset against capacity.
    fn mark_filled(&self, name: &str, slot: &Arc<Slot>) {
        let mut entries = self.entries.lock();
        let stamp = entries.tick();
        let entry = entries.slots.entry(name.to_string()).or_insert_with(|| Entry {
            slot:   Arc::clone(slot),
            stamp,
            filled: false,
        });
        if Arc::ptr_eq(&entry.slot, slot) {
            entry.filled = true;
            entry.stamp  = stamp;
        }
        entries.evict_over(self.capacity, name);
    }

    /// Drop a slot whose load failed, unless it has since been
    /// filled or another caller is loading into it right now.
    fn discard_empty(&self, name: &str, slot: &Arc<Slot>) {
        let mut entries = self.entries.lock();
        let same = matches!(entries.slots.get(name), Some(e) if Arc::ptr_eq(&e.slot, slot));
        let empty = slot.dataset.try_lock().map_or(false, |cell| cell.is_none());
        if same && empty {
            entries.slots.remove(name);
        }
    }

    #[cfg(test)]
    fn cached_names(&self) -> BTreeSet<String> {
        self.entries.lock().slots.keys().cloned().collect()
    }
}
