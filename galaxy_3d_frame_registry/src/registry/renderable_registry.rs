/// RenderableRegistry - per-frame renderable list and its material batches.
///
/// Every registration appends to the master list and to the batch of the
/// renderable's material instance, so both sequences keep registration
/// order. Batches are listed in the order their material was first seen.
///
/// The registry never clears itself: entries persist across frames until
/// `clear_renderables()` is called. Each clear of a populated registry
/// starts a new epoch, which invalidates every previously issued index.

use std::collections::hash_map::Entry;
use std::sync::Arc;
use rustc_hash::FxHashMap;
use crate::config::RegistryConfig;
use crate::error::{Error, Result};
use crate::resource::{Material, MaterialKey};
use crate::{engine_debug, engine_trace, engine_warn};
use super::capacity::CapacityWatch;
use super::render_batch::RenderBatch;
use super::render_index::{RegistryId, RenderIndex};
use super::renderable::Renderable;

const SOURCE: &str = "galaxy3d::RenderableRegistry";

pub struct RenderableRegistry {
    id: RegistryId,
    /// Registered renderables, in registration order
    renderables: Vec<Arc<dyn Renderable>>,
    /// Batches, in first-seen material order
    batches: Vec<RenderBatch>,
    /// Material identity -> position in `batches`
    batch_lookup: FxHashMap<MaterialKey, usize>,
    epoch: u64,
    capacity: CapacityWatch,
}

impl RenderableRegistry {
    /// Create an empty registry with the default configuration
    pub fn new() -> Self {
        Self::with_config(&RegistryConfig::default())
    }

    pub fn with_config(config: &RegistryConfig) -> Self {
        Self {
            id: RegistryId::next(),
            renderables: Vec::with_capacity(config.renderable_capacity),
            batches: Vec::new(),
            batch_lookup: FxHashMap::default(),
            epoch: 0,
            capacity: CapacityWatch::new(config.renderable_warn_threshold),
        }
    }

    /// Register a renderable for drawing.
    ///
    /// Appends it to the master list and its index to the batch of its
    /// material (creating the batch on first sight). Registering the same
    /// object twice yields two entries.
    ///
    /// # Errors
    ///
    /// `Error::InvalidMaterial` if the renderable's material cannot be
    /// resolved. Nothing is registered in that case.
    pub fn add_renderable(&mut self, renderable: Arc<dyn Renderable>) -> Result<RenderIndex> {
        let material = renderable.material().ok_or_else(|| Error::InvalidMaterial(format!(
            "renderable '{}' has no resolvable material", renderable.name()
        )))?;

        let index = RenderIndex::new(self.id, self.renderables.len(), self.epoch);
        let key = MaterialKey::of(&material);

        let batch_pos = match self.batch_lookup.entry(key) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                engine_trace!(SOURCE, "New batch for material '{}'", material.name());
                let pos = self.batches.len();
                self.batches.push(RenderBatch::new(material));
                entry.insert(pos);
                pos
            }
        };
        self.batches[batch_pos].push(index);
        self.renderables.push(renderable);

        if let Some(threshold) = self.capacity.observe(self.renderables.len()) {
            engine_warn!(SOURCE,
                "{} renderables registered in epoch {} (warn threshold {})",
                self.renderables.len(), self.epoch, threshold);
        }

        Ok(index)
    }

    /// Iterate over all batches, in the order their material was first registered.
    ///
    /// Lazy; call again to restart.
    pub fn batches(&self) -> impl ExactSizeIterator<Item = &RenderBatch> + '_ {
        self.batches.iter()
    }

    /// Batch of a given material instance, if any renderable uses it
    pub fn batch(&self, material: &Arc<Material>) -> Option<&RenderBatch> {
        let pos = self.batch_lookup.get(&MaterialKey::of(material))?;
        self.batches.get(*pos)
    }

    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    /// Renderable at an index issued by this registry in the current epoch.
    ///
    /// # Errors
    ///
    /// - `Error::ForeignIndex` if another registry issued the index
    /// - `Error::StaleIndex` if the index predates the last clear
    /// - `Error::IndexOutOfRange` if it points past the list
    pub fn renderable(&self, index: RenderIndex) -> Result<&Arc<dyn Renderable>> {
        if index.registry() != self.id {
            return Err(Error::ForeignIndex {
                index_registry: index.registry().value(),
                registry: self.id.value(),
            });
        }
        if index.epoch() != self.epoch {
            return Err(Error::StaleIndex {
                index_epoch: index.epoch(),
                current_epoch: self.epoch,
            });
        }
        self.renderables.get(index.slot()).ok_or(Error::IndexOutOfRange {
            index: index.slot(),
            len: self.renderables.len(),
        })
    }

    /// All renderables, in registration order
    pub fn renderables(&self) -> &[Arc<dyn Renderable>] {
        &self.renderables
    }

    pub fn renderable_count(&self) -> usize {
        self.renderables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderables.is_empty()
    }

    /// Process-unique id stamped into every index this registry issues
    pub fn id(&self) -> RegistryId {
        self.id
    }

    /// Current lifecycle epoch
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Drop every renderable and batch.
    ///
    /// Clearing an already empty registry is a no-op (the epoch does not move).
    pub fn clear_renderables(&mut self) {
        if self.renderables.is_empty() {
            return;
        }

        let count = self.renderables.len();
        let batch_count = self.batches.len();
        self.renderables.clear();
        self.batches.clear();
        self.batch_lookup.clear();
        self.capacity.reset();
        self.epoch += 1;

        engine_debug!(SOURCE,
            "Cleared {} renderables in {} batches, now in epoch {}",
            count, batch_count, self.epoch);
    }
}

impl Default for RenderableRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "renderable_registry_tests.rs"]
mod tests;
