/// Game Engine - Singleton manager for engine subsystems
///
/// This module provides global singleton management for the logger, the
/// engine configuration and the component registry. It uses thread-safe
/// static storage with RwLock for safe concurrent access.

use std::sync::{OnceLock, RwLock, Arc, Mutex};
use std::time::SystemTime;
use crate::component::ComponentRegistry;
use crate::config::EngineConfig;
use crate::error::{Result, Error};
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

// ===== INTERNAL STATE =====

/// Global engine state storage
static ENGINE_STATE: OnceLock<EngineState> = OnceLock::new();

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Internal state structure holding all engine singletons
struct EngineState {
    /// Active configuration
    config: RwLock<EngineConfig>,
    /// Component registry singleton
    component_registry: RwLock<Option<Arc<Mutex<ComponentRegistry>>>>,
}

impl EngineState {
    /// Create a new engine state from a configuration
    fn new(config: EngineConfig) -> Self {
        Self {
            config: RwLock::new(config),
            component_registry: RwLock::new(None),
        }
    }
}

// ===== PUBLIC API =====

/// Main engine singleton manager
///
/// Manages the lifecycle of the engine-wide subsystems using a singleton
/// pattern with thread-safe access.
///
/// # Example
///
/// ```no_run
/// use game_engine::game::Engine;
/// use game_engine::game::component::{create_internal_component, InternalComponent};
///
/// Engine::initialize()?;
/// Engine::create_component_registry()?;
///
/// let registry = Engine::component_registry()?;
/// let mut component = create_internal_component();
/// component.initialize();
/// registry.lock().unwrap().insert(Box::new(component));
///
/// Engine::shutdown();
/// # Ok::<(), game_engine::game::Error>(())
/// ```
pub struct Engine;

impl Engine {
    const SOURCE: &'static str = "game_engine::Engine";

    /// Helper to log errors before returning them (internal use)
    fn log_and_return_error(error: Error) -> Error {
        match &error {
            Error::InitializationFailed(msg) => {
                crate::engine_error!(Self::SOURCE, "Initialization failed: {}", msg);
            }
            _ => {
                crate::engine_error!(Self::SOURCE, "Engine error: {}", error);
            }
        }
        error
    }

    fn state() -> Result<&'static EngineState> {
        ENGINE_STATE.get()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("Engine not initialized. Call Engine::initialize() first.".to_string())
            ))
    }

    /// Initialize the engine with the default configuration
    ///
    /// Idempotent: an already initialized engine keeps its current configuration.
    ///
    /// # Errors
    ///
    /// Currently always succeeds, but returns Result for future extensibility.
    pub fn initialize() -> Result<()> {
        ENGINE_STATE.get_or_init(|| EngineState::new(EngineConfig::default()));
        Ok(())
    }

    /// Initialize the engine and store `config`, replacing any previous configuration
    ///
    /// # Errors
    ///
    /// Returns `Error::BackendError` if the configuration lock is poisoned.
    pub fn initialize_with_config(config: EngineConfig) -> Result<()> {
        let state = ENGINE_STATE.get_or_init(|| EngineState::new(config.clone()));

        let app_name = config.app_name.clone();

        // The guard (or the poison error carrying it) must be gone before
        // logging: the log filter reads the config
        let stored = state.config.write().map(|mut lock| *lock = config).is_ok();
        if !stored {
            return Err(crate::engine_err!(Self::SOURCE, "Config lock poisoned"));
        }

        crate::engine_info!(Self::SOURCE, "Engine initialized for '{}'", app_name);
        Ok(())
    }

    /// Shutdown the engine and destroy all singletons
    ///
    /// The configuration and the logger are kept; the engine can be reused
    /// without calling `initialize()` again.
    pub fn shutdown() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut registry) = state.component_registry.write() {
                *registry = None;
            }
        }
    }

    /// Get a copy of the current configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized or the lock is poisoned.
    pub fn config() -> Result<EngineConfig> {
        let state = Self::state()?;
        let config = state.config.read().map(|lock| lock.clone()).ok();
        config.ok_or_else(|| crate::engine_err!(Self::SOURCE, "Config lock poisoned"))
    }

    // ===== COMPONENT REGISTRY API =====

    /// Create and register the component registry singleton
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - A component registry already exists
    pub fn create_component_registry() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.component_registry.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("ComponentRegistry lock poisoned".to_string())
            ))?;

        if lock.is_some() {
            return Err(Self::log_and_return_error(
                Error::InitializationFailed("ComponentRegistry already exists. Call Engine::destroy_component_registry() first.".to_string())
            ));
        }

        *lock = Some(Arc::new(Mutex::new(ComponentRegistry::new())));

        crate::engine_info!(Self::SOURCE, "ComponentRegistry singleton created successfully");

        Ok(())
    }

    /// Get the component registry singleton
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The engine is not initialized
    /// - The component registry has not been created
    pub fn component_registry() -> Result<Arc<Mutex<ComponentRegistry>>> {
        let state = Self::state()?;

        let lock = state.component_registry.read()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("ComponentRegistry lock poisoned".to_string())
            ))?;

        lock.clone()
            .ok_or_else(|| Self::log_and_return_error(
                Error::InitializationFailed("ComponentRegistry not created. Call Engine::create_component_registry() first.".to_string())
            ))
    }

    /// Destroy the component registry singleton
    ///
    /// Existing `Arc` handles stay valid until dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the engine is not initialized
    pub fn destroy_component_registry() -> Result<()> {
        let state = Self::state()?;

        let mut lock = state.component_registry.write()
            .map_err(|_| Self::log_and_return_error(
                Error::BackendError("ComponentRegistry lock poisoned".to_string())
            ))?;

        *lock = None;

        crate::engine_info!(Self::SOURCE, "ComponentRegistry singleton destroyed");

        Ok(())
    }

    /// Reset all singletons and the configuration for testing
    #[cfg(test)]
    pub fn reset_for_testing() {
        if let Some(state) = ENGINE_STATE.get() {
            if let Ok(mut registry) = state.component_registry.write() {
                *registry = None;
            }
            state.config.clear_poison();
            if let Ok(mut config) = state.config.write() {
                *config = EngineConfig::default();
            }
        }
    }

    // ===== LOGGING API =====

    /// Set a custom logger
    ///
    /// Replace the default logger with a custom implementation.
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to default (DefaultLogger)
    pub fn reset_logger() {
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(mut lock) = logger_lock.write() {
            *lock = Box::new(DefaultLogger);
        }
    }

    /// Whether a message of `severity` passes the configured threshold.
    ///
    /// Everything passes until the engine is initialized.
    fn is_enabled(severity: LogSeverity) -> bool {
        match ENGINE_STATE.get() {
            Some(state) => state.config.read()
                .map(|config| severity >= config.min_log_severity)
                .unwrap_or(true),
            None => true,
        }
    }

    /// Internal logging method (for simple logs without file:line)
    ///
    /// Used by macros like engine_info!, engine_warn!, etc.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        Self::dispatch(severity, source, message, None, None);
    }

    /// Internal logging method with file:line information (for ERROR logs)
    ///
    /// Used by the engine_error! macro to include source location.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        Self::dispatch(severity, source, message, Some(file), Some(line));
    }

    fn dispatch(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: Option<&'static str>,
        line: Option<u32>,
    ) {
        if !Self::is_enabled(severity) {
            return;
        }
        let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
        if let Ok(lock) = logger_lock.read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file,
                line,
            });
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
