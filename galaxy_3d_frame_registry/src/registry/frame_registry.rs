/// FrameRegistry - per-frame collection point for renderables and lights.
///
/// Owns one `RenderableRegistry` and one `LightRegistry` and drives their
/// lifecycle. Scene objects register during their update pass; the render
/// stage reads batches and lights; an unload event clears everything.
///
/// Two states, `Populated` and `Cleared`. Under the default
/// `ClearPolicy::OnUnload` only `unload()` (or the individual clears) moves
/// the registry back to `Cleared`; starting a new frame does not.

use std::sync::Arc;
use crate::config::{ClearPolicy, RegistryConfig};
use crate::error::Result;
use crate::light::Light;
use crate::resource::Material;
use crate::engine_info;
use super::light_registry::LightRegistry;
use super::render_batch::RenderBatch;
use super::render_index::RenderIndex;
use super::renderable::Renderable;
use super::renderable_registry::RenderableRegistry;

const SOURCE: &str = "galaxy3d::FrameRegistry";

/// Lifecycle state of a `FrameRegistry`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// Holds entries from the current or earlier frames
    Populated,
    /// Empty
    Cleared,
}

pub struct FrameRegistry {
    renderables: RenderableRegistry,
    lights: LightRegistry,
    clear_policy: ClearPolicy,
    frame_index: u64,
}

impl FrameRegistry {
    /// Create an empty registry with the default configuration
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            renderables: RenderableRegistry::with_config(&config),
            lights: LightRegistry::with_config(&config),
            clear_policy: config.clear_policy,
            frame_index: 0,
        }
    }

    // ===== LIFECYCLE =====

    pub fn state(&self) -> LifecycleState {
        if self.renderables.is_empty() && self.lights.is_empty() {
            LifecycleState::Cleared
        } else {
            LifecycleState::Populated
        }
    }

    pub fn clear_policy(&self) -> ClearPolicy {
        self.clear_policy
    }

    /// Mark the start of a frame and return its number.
    ///
    /// Clears renderables and lights only under `ClearPolicy::EveryFrame`.
    pub fn begin_frame(&mut self) -> u64 {
        self.frame_index += 1;
        if self.clear_policy == ClearPolicy::EveryFrame {
            self.renderables.clear_renderables();
            self.lights.clear_lights();
        }
        self.frame_index
    }

    /// Number of frames started so far
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Scene/assembly teardown: drop every renderable and light.
    pub fn unload(&mut self) {
        let renderable_count = self.renderables.renderable_count();
        let light_count = self.lights.light_count();

        self.renderables.clear_renderables();
        self.lights.clear_lights();

        engine_info!(SOURCE,
            "Unloaded {} renderables and {} lights (epoch {})",
            renderable_count, light_count, self.renderables.epoch());
    }

    // ===== RENDERABLES =====

    /// See `RenderableRegistry::add_renderable`
    pub fn add_renderable(&mut self, renderable: Arc<dyn Renderable>) -> Result<RenderIndex> {
        self.renderables.add_renderable(renderable)
    }

    /// Batches in first-seen material order
    pub fn batches(&self) -> impl ExactSizeIterator<Item = &RenderBatch> + '_ {
        self.renderables.batches()
    }

    pub fn batch(&self, material: &Arc<Material>) -> Option<&RenderBatch> {
        self.renderables.batch(material)
    }

    pub fn batch_count(&self) -> usize {
        self.renderables.batch_count()
    }

    /// See `RenderableRegistry::renderable`
    pub fn renderable(&self, index: RenderIndex) -> Result<&Arc<dyn Renderable>> {
        self.renderables.renderable(index)
    }

    pub fn renderables(&self) -> &[Arc<dyn Renderable>] {
        self.renderables.renderables()
    }

    pub fn renderable_count(&self) -> usize {
        self.renderables.renderable_count()
    }

    pub fn clear_renderables(&mut self) {
        self.renderables.clear_renderables();
    }

    /// Renderable lifecycle epoch
    pub fn epoch(&self) -> u64 {
        self.renderables.epoch()
    }

    pub fn renderable_registry(&self) -> &RenderableRegistry {
        &self.renderables
    }

    // ===== LIGHTS =====

    pub fn add_light(&mut self, light: Arc<dyn Light>) {
        self.lights.add_light(light);
    }

    pub fn lights(&self) -> &[Arc<dyn Light>] {
        self.lights.lights()
    }

    /// The live light list
    pub fn lights_mut(&mut self) -> &mut Vec<Arc<dyn Light>> {
        self.lights.lights_mut()
    }

    pub fn light_count(&self) -> usize {
        self.lights.light_count()
    }

    pub fn clear_lights(&mut self) {
        self.lights.clear_lights();
    }

    pub fn light_registry(&self) -> &LightRegistry {
        &self.lights
    }
}

impl Default for FrameRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "frame_registry_tests.rs"]
mod tests;
