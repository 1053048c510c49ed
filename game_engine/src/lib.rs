/*!
# Game Engine

Core traits and types for a small game engine.

Components are used through capability traits (dynamic polymorphism via
`dyn Trait`); their concrete types can stay private to the module that
defines them and be handed out only through factory functions.

## Architecture

- **Updatable**: anything advanced by elapsed time
- **InternalComponent**: updatable component with an initialize/shutdown lifecycle
- **ComponentRegistry**: owns boxed components and updates the active ones
- **Engine**: global singletons (logger, configuration, component registry)
- **graphics / ui**: renderer placeholders
*/

// Internal modules
mod error;
mod engine;
mod config;
pub mod log;
pub mod component;
pub mod graphics;
pub mod ui;

// Main game namespace module
pub mod game {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton and its configuration
    pub use crate::engine::Engine;
    pub use crate::config::EngineConfig;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Component sub-module
    pub mod component {
        pub use crate::component::*;
    }

    // 3D renderer sub-module
    pub mod graphics {
        pub use crate::graphics::*;
    }

    // UI renderer sub-module
    pub mod ui {
        pub use crate::ui::*;
    }
}
