/// Galaxy3D Engine - process-wide access to the frame registry and logger
///
/// Most code should own a `FrameRegistry` and pass it by reference to the
/// update and render stages. For scene code that cannot be threaded a
/// reference, the engine also offers one process-wide registry behind an
/// `Arc<Mutex<_>>`, together with the `unload()` signal that clears it.

use std::sync::{OnceLock, RwLock, Arc, Mutex};
use std::time::SystemTime;
use crate::config::RegistryConfig;
use crate::error::{Result, Error};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
use crate::registry::FrameRegistry;

// ===== INTERNAL STATE =====

/// Global engine state storage
static ENGINE_STATE: OnceLock<EngineState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Internal state structure holding all engine singletons
struct EngineState {
    /// Frame registry singleton (the Mutex is the external lock registration needs)
    frame_registry: RwLock<Option<Arc<Mutex<FrameRegistry>>>>,
}

impl EngineState {
    fn new() -> Self {
        Self {
            frame_registry: RwLock::new(None),
        }
    }
}

fn logger() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::default())))
}

// ===== PUBLIC API =====

/// Main engine singleton manager
///
/// # Example
///
/// ```no_run
/// use galaxy_3d_frame_registry::galaxy3d::{Engine, RegistryConfig};
///
/// Engine::initialize()?;
/// let registry = Engine::create_frame_registry(RegistryConfig::default())?;
///
/// // ... scene update registers renderables and lights ...
/// assert_eq!(registry.lock().unwrap().renderable_count(), 0);
///
/// // Scene teardown
/// Engine::unload()?;
/// Engine::shutdown();
/// # Ok::<(), galaxy_3d_frame_registry::galaxy3d::Error>(())
/// ```
pub struct Engine;

impl Engine {
    /// Helper to log errors before returning them (internal use)
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::InitializationFailed(msg) => {
                crate::engine_error!("galaxy3d::Engine", "Initialization failed: {}", msg);
            }
            Error::LockPoisoned(what) => {
                crate::engine_error!("galaxy3d::Engine", "{} lock poisoned", what);
            }
            _ => {
                crate::engine_error!("galaxy3d::Engine", "Engine error: {}", error);
            }
        }
        error
    }

    fn state() -> Result<&'static EngineState> {
        ENGINE_STATE.get().ok_or_else(|| Self::log_and_return_error(
            Error::InitializationFailed("Engine not initialized. Call Engine::initialize() first.".to_string())
        ))
    }

    /// Initialize the engine
    ///
    /// Idempotent. Must be called before creating the frame registry singleton.
    pub fn initialize() -> Result<()> {
        ENGINE_STATE.get_or_init(EngineState::new);
        Ok(())
    }

    /// Destroy all singletons.
    ///
    /// The engine stays initialized; a new registry can be created afterwards.
    pub fn shutdown() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut registry) = state.frame_registry.write() {
                *registry = None;
            }
        }
    }

    // ===== FRAME REGISTRY API =====

    /// Create and register the process-wide frame registry
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - A frame registry already exists
    /// - The registry lock is poisoned
    pub fn create_frame_registry(config: RegistryConfig) -> Result<Arc<Mutex<FrameRegistry>>> {
        let state = Self::state()?;

        let mut lock = state.frame_registry.write()
            .map_err(|_| Self::log_and_return_error(Error::LockPoisoned("FrameRegistry".to_string())))?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(
                Error::InitializationFailed("FrameRegistry already exists. Call Engine::destroy_frame_registry() first.".to_string())
            ));
        }

        let registry = Arc::new(Mutex::new(FrameRegistry::with_config(config)));
        *lock = Some(registry.clone());

        crate::engine_info!("galaxy3d::Engine", "FrameRegistry singleton created successfully");

        Ok(registry)
    }

    /// Get the process-wide frame registry
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized or the registry
    /// has not been created.
    pub fn frame_registry() -> Result<Arc<Mutex<FrameRegistry>>> {
        let state = Self::state()?;

        let lock = state.frame_registry.read()
            .map_err(|_| Self::log_and_return_error(Error::LockPoisoned("FrameRegistry".to_string())))?;

        lock.clone()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("FrameRegistry not created. Call Engine::create_frame_registry() first.".to_string())
            ))
    }

    /// Destroy the process-wide frame registry
    ///
    /// Existing `Arc` handles stay valid until dropped.
    pub fn destroy_frame_registry() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.frame_registry.write()
            .map_err(|_| Self::log_and_return_error(Error::LockPoisoned("FrameRegistry".to_string())))?;

        *lock = None;

        crate::engine_info!("galaxy3d::Engine", "FrameRegistry singleton destroyed");

        Ok(())
    }

    /// Scene/assembly unload signal: clear the process-wide registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry does not exist or its lock is poisoned.
    pub fn unload() -> Result<()> {
        let registry = Self::frame_registry()?;
        let mut registry = registry.lock()
            .map_err(|_| Self::log_and_return_error(Error::LockPoisoned("FrameRegistry".to_string())))?;
        registry.unload();
        Ok(())
    }

    /// Reset all singletons for testing (only available in test builds)
    #[cfg(test)]
    pub fn reset_for_testing() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut registry) = state.frame_registry.write() {
                *registry = None;
            }
        }
    }

    // ===== LOGGING API =====

    /// Replace the current logger
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = self::logger().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to `DefaultLogger::default()`
    pub fn reset_logger() {
        if let Ok(mut lock) = self::logger().write() {
            *lock = Box::new(DefaultLogger::default());
        }
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like engine_info!, engine_warn!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = self::logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Internal logging method with file:line information (for ERROR logs)
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = self::logger().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
