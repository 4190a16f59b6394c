/// RenderBatch - every registered renderable sharing one material instance.
///
/// Indices are kept in registration order, which is the draw order within
/// the batch. The batch holds the material `Arc`, so the identity key
/// cannot be recycled while the batch exists.

use std::sync::Arc;
use crate::resource::{Material, MaterialKey};
use super::render_index::RenderIndex;

#[derive(Debug)]
pub struct RenderBatch {
    material: Arc<Material>,
    indices: Vec<RenderIndex>,
}

impl RenderBatch {
    pub(crate) fn new(material: Arc<Material>) -> Self {
        Self {
            material,
            indices: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, index: RenderIndex) {
        self.indices.push(index);
    }

    pub fn material(&self) -> &Arc<Material> {
        &self.material
    }

    /// Identity key of the batch material
    pub fn key(&self) -> MaterialKey {
        MaterialKey::of(&self.material)
    }

    /// Render indices in registration order
    pub fn indices(&self) -> &[RenderIndex] {
        &self.indices
    }

    /// Positions in the renderable list, in registration order
    pub fn slots(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().map(RenderIndex::slot)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
