//! Error types for the Galaxy3D frame registry
//!
//! This module defines the error types used throughout the crate,
//! covering registration preconditions, lifecycle (epoch) violations,
//! resource validation, and command submission.

use std::fmt;

/// Result type for Galaxy3D frame registry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D frame registry errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A renderable reported a material that cannot be resolved
    InvalidMaterial(String),

    /// Invalid resource description (material, light, etc.)
    InvalidResource(String),

    /// Render index points past the end of the renderable list
    IndexOutOfRange {
        /// Position requested
        index: usize,
        /// Current renderable count
        len: usize,
    },

    /// Render index was issued before the last clear
    StaleIndex {
        /// Epoch the index was issued in
        index_epoch: u64,
        /// Epoch the registry is currently in
        current_epoch: u64,
    },

    /// Render index was issued by a different registry
    ForeignIndex {
        /// Registry the index was issued by
        index_registry: u64,
        /// Registry the lookup was made on
        registry: u64,
    },

    /// The pipeline refused or failed a command buffer
    SubmissionFailed(String),

    /// Initialization failed (engine, registry singleton)
    InitializationFailed(String),

    /// A singleton lock was poisoned by a panicking holder
    LockPoisoned(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidMaterial(msg) => write!(f, "Invalid material: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::IndexOutOfRange { index, len } => {
                write!(f, "Render index {} out of range (len {})", index, len)
            }
            Error::StaleIndex { index_epoch, current_epoch } => write!(
                f,
                "Stale render index: issued in epoch {}, registry is in epoch {}",
                index_epoch, current_epoch
            ),
            Error::ForeignIndex { index_registry, registry } => write!(
                f,
                "Render index issued by registry {} used on registry {}",
                index_registry, registry
            ),
            Error::SubmissionFailed(msg) => write!(f, "Submission failed: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::LockPoisoned(what) => write!(f, "{} lock poisoned", what),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR and build an `Error::InvalidResource` from a format string.
///
/// # Example
///
/// ```ignore
/// let light = lights.get(i).ok_or_else(|| engine_err!("galaxy3d::Light", "No light {}", i))?;
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::galaxy3d::Engine::log_detailed(
            $crate::galaxy3d::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::galaxy3d::Error::InvalidResource(message)
    }};
}

/// Log an ERROR and return early with an `Error::InvalidResource`.
///
/// # Example
///
/// ```ignore
/// if desc.name.is_empty() {
///     engine_bail!("galaxy3d::Material", "Material name must not be empty");
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
