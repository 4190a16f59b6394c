//! Epoch-stamped position of a renderable in the frame registry.
//!
//! A `RenderIndex` is issued by `RenderableRegistry::add_renderable` and
//! stays valid until the next clear. Every clear of a populated registry
//! advances the epoch, so an index kept across a clear is rejected with
//! `Error::StaleIndex` instead of silently resolving to another renderable.
//!
//! Epochs restart at 0 in every registry, so the index also carries the
//! id of the registry that issued it. Ids are unique for the process
//! lifetime; an index handed to another registry (including one recreated
//! after a scene teardown) is rejected with `Error::ForeignIndex`.

use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_REGISTRY_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier of a renderable registry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegistryId(u64);

impl RegistryId {
    pub(crate) fn next() -> Self {
        Self(NEXT_REGISTRY_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Position of a renderable plus the registry and epoch it was issued in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderIndex {
    registry: RegistryId,
    slot: usize,
    epoch: u64,
}

impl RenderIndex {
    pub(crate) fn new(registry: RegistryId, slot: usize, epoch: u64) -> Self {
        Self { registry, slot, epoch }
    }

    /// Registry that issued the index
    pub fn registry(&self) -> RegistryId {
        self.registry
    }

    /// Position in the renderable list (registration order)
    pub fn slot(&self) -> usize {
        self.slot
    }

    /// Lifecycle epoch the index was issued in
    pub fn epoch(&self) -> u64 {
        self.epoch
    }
}
