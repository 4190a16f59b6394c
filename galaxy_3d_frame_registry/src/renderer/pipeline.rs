/// RenderPipeline trait - the consumer of recorded frames

use glam::DVec3;
use crate::error::Result;
use super::command_buffer::CommandBuffer;

/// Backend pipeline that executes recorded command buffers.
///
/// Implemented by the graphics backend; this crate only records.
pub trait RenderPipeline: Send {
    /// Execute a recorded frame
    fn submit(&mut self, commands: CommandBuffer) -> Result<()>;

    /// Resize the backbuffer (window resize, resolution change)
    fn resize_backbuffer(&mut self, width: u32, height: u32) -> Result<()>;
}

/// Per-view parameters needed to encode lights for a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewParams {
    /// Camera world position, double precision
    pub camera_position: DVec3,
    /// Encode light positions relative to the camera
    pub camera_relative: bool,
    /// Shadow atlas tile resolution handed to shadow-casting lights
    pub shadow_atlas_resolution: u32,
}

impl ViewParams {
    pub fn new(camera_position: DVec3) -> Self {
        Self {
            camera_position,
            ..Self::default()
        }
    }
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            camera_position: DVec3::ZERO,
            camera_relative: true,
            shadow_atlas_resolution: 1024,
        }
    }
}
