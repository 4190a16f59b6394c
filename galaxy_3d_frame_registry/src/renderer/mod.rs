//! Command submission path
//!
//! Records the frame registry into a backend-agnostic command buffer and
//! hands it to the pipeline.

mod command_buffer;
mod pipeline;
mod drawer;

#[cfg(test)]
pub(crate) mod mock_pipeline;

pub use command_buffer::{Command, CommandBuffer};
pub use pipeline::{RenderPipeline, ViewParams};
pub use drawer::{Drawer, BatchDrawer, submit_frame};
