/// Renderable capability.
///
/// Anything that wants to be drawn this frame implements `Renderable`:
/// it names its material (the batching key) and hands over its draw data
/// when the submission stage asks for it. The registry never inspects
/// anything else.

use std::sync::Arc;
use glam::Mat4;
use crate::error::Result;
use crate::resource::Material;

// ===== MESH HANDLE =====

/// Opaque handle to mesh data owned by the asset layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MeshHandle(pub u32);

// ===== DRAW DATA =====

/// Everything the submission stage needs to issue one draw call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawData {
    pub mesh: MeshHandle,
    pub world_matrix: Mat4,
    /// Index count (0 = non-indexed draw of `vertex_count` vertices)
    pub index_count: u32,
    pub first_index: u32,
    pub vertex_offset: i32,
    pub vertex_count: u32,
    pub instance_count: u32,
}

impl DrawData {
    /// Indexed draw of a whole mesh, one instance
    pub fn indexed(mesh: MeshHandle, world_matrix: Mat4, index_count: u32) -> Self {
        Self {
            mesh,
            world_matrix,
            index_count,
            first_index: 0,
            vertex_offset: 0,
            vertex_count: 0,
            instance_count: 1,
        }
    }

    /// Non-indexed draw of `vertex_count` vertices, one instance
    pub fn non_indexed(mesh: MeshHandle, world_matrix: Mat4, vertex_count: u32) -> Self {
        Self {
            mesh,
            world_matrix,
            index_count: 0,
            first_index: 0,
            vertex_offset: 0,
            vertex_count,
            instance_count: 1,
        }
    }

    pub fn is_indexed(&self) -> bool {
        self.index_count > 0
    }
}

// ===== RENDERABLE TRAIT =====

/// An object that contributes one draw call per frame, keyed by its material.
///
/// Implementations are owned by the scene. The registry keeps a shared
/// reference for the current epoch only.
pub trait Renderable: Send + Sync {
    /// Material this renderable draws with.
    ///
    /// `None` means the material cannot be resolved; registration is then
    /// rejected with `Error::InvalidMaterial`.
    ///
    /// Read once, by `add_renderable`. A renderable that later reports a
    /// different material stays in the batch it was filed under until the
    /// registry is cleared and it registers again.
    fn material(&self) -> Option<Arc<Material>>;

    /// Draw parameters, read by the submission stage.
    fn draw_data(&self) -> Result<DrawData>;

    /// Name used in diagnostics
    fn name(&self) -> &str {
        "<unnamed>"
    }
}

// ===== MESH RENDERABLE =====

/// Plain renderable: a named mesh drawn with a fixed material.
#[derive(Debug, Clone)]
pub struct MeshRenderable {
    name: String,
    material: Option<Arc<Material>>,
    draw: DrawData,
}

impl MeshRenderable {
    pub fn new(name: impl Into<String>, material: Arc<Material>, draw: DrawData) -> Self {
        Self {
            name: name.into(),
            material: Some(material),
            draw,
        }
    }

    /// A renderable whose material is not loaded (yet). Registering it fails.
    pub fn without_material(name: impl Into<String>, draw: DrawData) -> Self {
        Self {
            name: name.into(),
            material: None,
            draw,
        }
    }
}

impl Renderable for MeshRenderable {
    fn material(&self) -> Option<Arc<Material>> {
        self.material.clone()
    }

    fn draw_data(&self) -> Result<DrawData> {
        Ok(self.draw)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
