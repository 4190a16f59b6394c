//! Light module - light capability and its GPU encoding.
//!
//! The engine does not own lights: scene objects implement `Light` and
//! register themselves with the frame registry every frame. The submission
//! stage turns them into `GpuLightRecord`s.

mod gpu_light;
mod standard_light;

use glam::{DVec3, Vec3};

pub use gpu_light::{GpuLightRecord, LightFlags, encode_position};
pub use standard_light::StandardLight;

/// Kind of light source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LightType {
    /// Parallel rays (sun); position is ignored
    Directional,
    /// Omnidirectional from a point
    Point,
    /// Cone from a point
    Spot,
}

impl LightType {
    /// Identifier written into `GpuLightRecord::params[0]`
    pub fn gpu_id(&self) -> u32 {
        match self {
            LightType::Directional => 0,
            LightType::Point => 1,
            LightType::Spot => 2,
        }
    }

    pub fn from_gpu_id(id: u32) -> Option<Self> {
        match id {
            0 => Some(LightType::Directional),
            1 => Some(LightType::Point),
            2 => Some(LightType::Spot),
            _ => None,
        }
    }
}

/// A light contributing to shading this frame.
pub trait Light: Send + Sync {
    fn light_type(&self) -> LightType;

    /// World position, in double precision
    fn position(&self) -> DVec3;

    /// Normalized direction (unused by point lights)
    fn direction(&self) -> Vec3;

    fn casts_shadows(&self) -> bool;

    /// Produce the record uploaded to the GPU.
    ///
    /// # Arguments
    ///
    /// * `shadow_atlas_resolution` - Resolution of this light's shadow atlas tile
    /// * `camera_relative` - Encode the position relative to `camera_position`
    /// * `camera_position` - Camera world position, in double precision
    fn gpu_record(
        &self,
        shadow_atlas_resolution: u32,
        camera_relative: bool,
        camera_position: DVec3,
    ) -> GpuLightRecord;
}

#[cfg(test)]
#[path = "light_tests.rs"]
mod tests;
