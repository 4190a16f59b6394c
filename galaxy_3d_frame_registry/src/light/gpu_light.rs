/// GPU-ready light record.
///
/// Fixed 80-byte `#[repr(C)]` layout, uploaded as-is into the light
/// storage buffer. Every member is a 16-byte vector so the layout matches
/// std140 and std430 alike.

use bitflags::bitflags;
use bytemuck::{Pod, Zeroable};
use glam::{DVec3, Vec3};
use super::LightType;

bitflags! {
    /// Per-light shader flags (`GpuLightRecord::params[1]`)
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LightFlags: u32 {
        /// The light renders into the shadow atlas
        const CAST_SHADOW     = 1 << 0;
        /// `position_range.xyz` is relative to the camera
        const CAMERA_RELATIVE = 1 << 1;
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct GpuLightRecord {
    /// xyz: position (world or camera-relative), w: range
    pub position_range: [f32; 4],
    /// xyz: normalized direction, w: unused
    pub direction: [f32; 4],
    /// rgb: linear color, a: intensity
    pub color_intensity: [f32; 4],
    /// x: cos(inner angle), y: cos(outer angle), zw: unused
    pub spot_cone: [f32; 4],
    /// x: light type, y: `LightFlags` bits, z: shadow resolution (0 = none), w: unused
    pub params: [u32; 4],
}

impl GpuLightRecord {
    pub fn light_type(&self) -> Option<LightType> {
        LightType::from_gpu_id(self.params[0])
    }

    pub fn flags(&self) -> LightFlags {
        LightFlags::from_bits_truncate(self.params[1])
    }

    pub fn shadow_resolution(&self) -> u32 {
        self.params[2]
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.position_range[0], self.position_range[1], self.position_range[2])
    }
}

/// Encode a world position for upload.
///
/// With `camera_relative`, the offset to the camera is taken in double
/// precision before narrowing to f32.
pub fn encode_position(position: DVec3, camera_relative: bool, camera_position: DVec3) -> Vec3 {
    if camera_relative {
        (position - camera_position).as_vec3()
    } else {
        position.as_vec3()
    }
}
