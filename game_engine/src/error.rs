//! Error types for the game engine
//!
//! Component operations never fail. Errors only come from the engine
//! singleton layer and from the component registry.

use std::fmt;

/// Result type for game engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Game engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Internal failure (poisoned lock, broken invariant)
    BackendError(String),

    /// Initialization failed (engine not initialized, singleton missing or duplicated)
    InitializationFailed(String),

    /// No component is registered under the given key
    ComponentNotFound(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::ComponentNotFound(msg) => write!(f, "Component not found: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
