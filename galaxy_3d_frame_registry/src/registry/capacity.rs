/// Growth diagnostic shared by the renderable and light registries.
///
/// Nothing bounds a registry: if the caller never clears it, it grows
/// every frame. `CapacityWatch` reports the first time a count goes past
/// the threshold, once between two clears.

#[derive(Debug, Clone, Copy)]
pub(crate) struct CapacityWatch {
    threshold: Option<usize>,
    warned: bool,
}

impl CapacityWatch {
    pub(crate) fn new(threshold: Option<usize>) -> Self {
        Self {
            threshold,
            warned: false,
        }
    }

    /// Returns the threshold if `count` just crossed it.
    pub(crate) fn observe(&mut self, count: usize) -> Option<usize> {
        let threshold = self.threshold?;
        if self.warned || count <= threshold {
            return None;
        }
        self.warned = true;
        Some(threshold)
    }

    pub(crate) fn reset(&mut self) {
        self.warned = false;
    }
}
