/// StandardLight - stock directional / point / spot light.

use glam::{DVec3, Vec3};
use super::{Light, LightType};
use super::gpu_light::{GpuLightRecord, LightFlags, encode_position};

#[derive(Debug, Clone, PartialEq)]
pub struct StandardLight {
    light_type: LightType,
    position: DVec3,
    direction: Vec3,
    color: Vec3,
    intensity: f32,
    range: f32,
    /// Spot inner/outer half-angles, radians
    inner_angle: f32,
    outer_angle: f32,
    cast_shadows: bool,
}

impl StandardLight {
    pub fn directional(direction: Vec3, color: Vec3, intensity: f32) -> Self {
        Self {
            light_type: LightType::Directional,
            position: DVec3::ZERO,
            direction: direction.normalize_or_zero(),
            color,
            intensity,
            range: 0.0,
            inner_angle: 0.0,
            outer_angle: 0.0,
            cast_shadows: false,
        }
    }

    pub fn point(position: DVec3, color: Vec3, intensity: f32, range: f32) -> Self {
        Self {
            light_type: LightType::Point,
            position,
            direction: Vec3::ZERO,
            color,
            intensity,
            range: range.max(0.0),
            inner_angle: 0.0,
            outer_angle: 0.0,
            cast_shadows: false,
        }
    }

    /// Spot light. The inner angle is clamped to the outer one.
    pub fn spot(
        position: DVec3,
        direction: Vec3,
        color: Vec3,
        intensity: f32,
        range: f32,
        inner_angle: f32,
        outer_angle: f32,
    ) -> Self {
        Self {
            light_type: LightType::Spot,
            position,
            direction: direction.normalize_or_zero(),
            color,
            intensity,
            range: range.max(0.0),
            inner_angle: inner_angle.min(outer_angle),
            outer_angle,
            cast_shadows: false,
        }
    }

    pub fn with_shadows(mut self, cast_shadows: bool) -> Self {
        self.cast_shadows = cast_shadows;
        self
    }
}

impl Light for StandardLight {
    fn light_type(&self) -> LightType {
        self.light_type
    }

    fn position(&self) -> DVec3 {
        self.position
    }

    fn direction(&self) -> Vec3 {
        self.direction
    }

    fn casts_shadows(&self) -> bool {
        self.cast_shadows
    }

    fn gpu_record(
        &self,
        shadow_atlas_resolution: u32,
        camera_relative: bool,
        camera_position: DVec3,
    ) -> GpuLightRecord {
        let position = match self.light_type {
            LightType::Directional => Vec3::ZERO,
            _ => encode_position(self.position, camera_relative, camera_position),
        };

        let spot_cone = match self.light_type {
            LightType::Spot => [self.inner_angle.cos(), self.outer_angle.cos(), 0.0, 0.0],
            _ => [0.0; 4],
        };

        let mut flags = LightFlags::empty();
        flags.set(LightFlags::CAST_SHADOW, self.cast_shadows);
        flags.set(LightFlags::CAMERA_RELATIVE, camera_relative);

        let shadow_resolution = if self.cast_shadows { shadow_atlas_resolution } else { 0 };

        GpuLightRecord {
            position_range: [position.x, position.y, position.z, self.range],
            direction: [self.direction.x, self.direction.y, self.direction.z, 0.0],
            color_intensity: [self.color.x, self.color.y, self.color.z, self.intensity],
            spot_cone,
            params: [self.light_type.gpu_id(), flags.bits(), shadow_resolution, 0],
        }
    }
}
