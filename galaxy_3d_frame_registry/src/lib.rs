/*!
# Galaxy 3D Frame Registry

Per-frame collection of renderables and lights for the Galaxy 3D rendering engine.

Scene objects register themselves with a `FrameRegistry` during their update
pass. Renderables are grouped into batches by material identity, so the
submission stage binds each material once and issues its draws back to back.
Lights are collected alongside and encoded into fixed-layout GPU records.

## Architecture

- **FrameRegistry**: Owns the renderable and light registries and their lifecycle
- **RenderableRegistry**: Ordered renderable list plus material-keyed batches
- **LightRegistry**: Ordered light list and GPU record encoding
- **Drawer**: Records a registry into a backend-agnostic `CommandBuffer`
- **RenderPipeline**: Backend trait that consumes command buffers
- **Engine**: Process-wide registry singleton, unload signal, and logger

Backend implementations provide concrete `RenderPipeline` types.
*/

// Internal modules
mod error;
mod engine;
mod config;
pub mod log;
pub mod light;
pub mod registry;
pub mod renderer;
pub mod resource;

// Main galaxy3d namespace module
pub mod galaxy3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton
    pub use crate::engine::Engine;

    // Registry configuration
    pub use crate::config::{RegistryConfig, ClearPolicy};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: engine_* macros are NOT re-exported here - they are internal only
    }

    // Light sub-module
    pub mod light {
        pub use crate::light::*;
    }

    // Frame registry sub-module
    pub mod registry {
        pub use crate::registry::*;
    }

    // Render sub-module with the submission path
    pub mod render {
        pub use crate::renderer::*;
    }

    // Resource sub-module
    pub mod resource {
        pub use crate::resource::*;
    }
}

// Re-export math library at crate root
pub use glam;
