//! Frame registry configuration.
//!
//! Plain data with builder-style setters. Every field has a default that
//! reproduces the engine's standard behavior: registries are cleared only
//! by an explicit unload, with capacity warnings past generous thresholds.

/// When the frame registry drops its renderables and lights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClearPolicy {
    /// Only an explicit unload (scene/assembly teardown) clears the registry.
    /// Entries registered in earlier frames persist until then.
    #[default]
    OnUnload,
    /// `FrameRegistry::begin_frame()` also clears renderables and lights.
    EveryFrame,
}

/// Configuration for a `FrameRegistry`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Initial capacity of the renderable list
    pub renderable_capacity: usize,
    /// Initial capacity of the light list
    pub light_capacity: usize,
    /// Warn once between clears when the renderable count exceeds this value
    pub renderable_warn_threshold: Option<usize>,
    /// Warn once between clears when the light count exceeds this value
    pub light_warn_threshold: Option<usize>,
    /// Clearing boundary
    pub clear_policy: ClearPolicy,
}

impl RegistryConfig {
    pub const DEFAULT_RENDERABLE_WARN_THRESHOLD: usize = 65_536;
    pub const DEFAULT_LIGHT_WARN_THRESHOLD: usize = 1_024;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_renderable_capacity(mut self, capacity: usize) -> Self {
        self.renderable_capacity = capacity;
        self
    }

    pub fn with_light_capacity(mut self, capacity: usize) -> Self {
        self.light_capacity = capacity;
        self
    }

    /// `None` disables the renderable capacity diagnostic.
    pub fn with_renderable_warn_threshold(mut self, threshold: Option<usize>) -> Self {
        self.renderable_warn_threshold = threshold;
        self
    }

    /// `None` disables the light capacity diagnostic.
    pub fn with_light_warn_threshold(mut self, threshold: Option<usize>) -> Self {
        self.light_warn_threshold = threshold;
        self
    }

    pub fn with_clear_policy(mut self, policy: ClearPolicy) -> Self {
        self.clear_policy = policy;
        self
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            renderable_capacity: 0,
            light_capacity: 0,
            renderable_warn_threshold: Some(Self::DEFAULT_RENDERABLE_WARN_THRESHOLD),
            light_warn_threshold: Some(Self::DEFAULT_LIGHT_WARN_THRESHOLD),
            clear_policy: ClearPolicy::OnUnload,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
