/// LightRegistry - lights contributing to shading this frame.
///
/// Append-only between clears: no deduplication, no capacity bound.
/// `lights_mut()` hands out the live list, not a copy.

use std::sync::Arc;
use glam::DVec3;
use crate::config::RegistryConfig;
use crate::light::{GpuLightRecord, Light};
use crate::{engine_debug, engine_warn};
use super::capacity::CapacityWatch;

const SOURCE: &str = "galaxy3d::LightRegistry";

pub struct LightRegistry {
    lights: Vec<Arc<dyn Light>>,
    capacity: CapacityWatch,
}

impl LightRegistry {
    pub fn new() -> Self {
        Self::with_config(&RegistryConfig::default())
    }

    pub fn with_config(config: &RegistryConfig) -> Self {
        Self {
            lights: Vec::with_capacity(config.light_capacity),
            capacity: CapacityWatch::new(config.light_warn_threshold),
        }
    }

    /// Register a light. The same light may be registered more than once.
    pub fn add_light(&mut self, light: Arc<dyn Light>) {
        self.lights.push(light);

        if let Some(threshold) = self.capacity.observe(self.lights.len()) {
            engine_warn!(SOURCE,
                "{} lights registered since the last clear (warn threshold {})",
                self.lights.len(), threshold);
        }
    }

    /// Registered lights, in registration order
    pub fn lights(&self) -> &[Arc<dyn Light>] {
        &self.lights
    }

    /// The live light list. Consumers are expected not to modify it.
    pub fn lights_mut(&mut self) -> &mut Vec<Arc<dyn Light>> {
        &mut self.lights
    }

    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lights.is_empty()
    }

    /// Shadow-casting lights, in registration order
    pub fn shadow_casters(&self) -> impl Iterator<Item = &Arc<dyn Light>> + '_ {
        self.lights.iter().filter(|light| light.casts_shadows())
    }

    /// Encode every light for upload, in registration order
    pub fn gpu_records(
        &self,
        shadow_atlas_resolution: u32,
        camera_relative: bool,
        camera_position: DVec3,
    ) -> Vec<GpuLightRecord> {
        self.lights
            .iter()
            .map(|light| light.gpu_record(shadow_atlas_resolution, camera_relative, camera_position))
            .collect()
    }

    pub fn clear_lights(&mut self) {
        if self.lights.is_empty() {
            return;
        }
        let count = self.lights.len();
        self.lights.clear();
        self.capacity.reset();
        engine_debug!(SOURCE, "Cleared {} lights", count);
    }
}

impl Default for LightRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "light_registry_tests.rs"]
mod tests;
