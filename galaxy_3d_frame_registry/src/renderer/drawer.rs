/// Drawing strategies.
///
/// A Drawer records the frame registry's batches and lights into a command
/// buffer. This is the submission boundary: a renderable that cannot be
/// drawn is logged and skipped here, and the rest of the frame proceeds.

use crate::error::Result;
use crate::registry::FrameRegistry;
use crate::{engine_error, engine_trace, engine_warn};
use super::command_buffer::CommandBuffer;
use super::pipeline::{RenderPipeline, ViewParams};

const SOURCE: &str = "galaxy3d::BatchDrawer";

/// Strategy for recording a frame.
///
/// `&self` because drawing is stateless: the same Drawer can be
/// reused across registries and frames.
pub trait Drawer: Send + Sync {
    /// Record the registry's lights and batches into the command buffer.
    fn draw(&self, registry: &FrameRegistry, view: &ViewParams, commands: &mut CommandBuffer) -> Result<()>;
}

/// Batch drawer: one light upload, then one material bind per batch
/// followed by its draws in registration order.
///
/// Batches are visited in first-seen material order; no sorting.
#[derive(Debug, Default)]
pub struct BatchDrawer;

impl BatchDrawer {
    pub fn new() -> Self {
        Self
    }
}

impl Drawer for BatchDrawer {
    fn draw(&self, registry: &FrameRegistry, view: &ViewParams, commands: &mut CommandBuffer) -> Result<()> {
        commands.upload_lights(registry.light_registry().gpu_records(
            view.shadow_atlas_resolution,
            view.camera_relative,
            view.camera_position,
        ));

        for batch in registry.batches() {
            let mut bound = false;

            for &index in batch.indices() {
                let draw = match registry.renderable(index).and_then(|r| r.draw_data()) {
                    Ok(draw) => draw,
                    Err(err) => {
                        engine_warn!(SOURCE, "renderable skipped: {}", err);
                        continue;
                    }
                };

                // A batch whose renderables all fail emits no bind
                if !bound {
                    commands.bind_material(batch.material().clone());
                    bound = true;
                }
                commands.draw(draw);
            }
        }

        engine_trace!(SOURCE, "Recorded {} draws, {} material binds",
            commands.draw_count(), commands.material_bind_count());
        Ok(())
    }
}

/// Record the registry with `drawer` and hand the result to `pipeline`.
///
/// Returns the number of draws submitted.
pub fn submit_frame(
    registry: &FrameRegistry,
    drawer: &dyn Drawer,
    pipeline: &mut dyn RenderPipeline,
    view: &ViewParams,
) -> Result<usize> {
    let mut commands = CommandBuffer::new();
    drawer.draw(registry, view, &mut commands)?;

    let draw_count = commands.draw_count();
    pipeline.submit(commands).map_err(|err| {
        engine_error!("galaxy3d::Renderer", "Frame submission failed: {}", err);
        err
    })?;

    Ok(draw_count)
}

#[cfg(test)]
#[path = "drawer_tests.rs"]
mod tests;
