//! Frame registry module
//!
//! Collects renderables (batched by material identity) and lights each
//! frame, and hands them to the submission stage.

mod capacity;
mod render_index;
mod render_batch;
mod renderable;
mod renderable_registry;
mod light_registry;
mod frame_registry;

pub use render_index::{RegistryId, RenderIndex};
pub use render_batch::RenderBatch;
pub use renderable::{Renderable, DrawData, MeshHandle, MeshRenderable};
pub use renderable_registry::RenderableRegistry;
pub use light_registry::LightRegistry;
pub use frame_registry::{FrameRegistry, LifecycleState};
