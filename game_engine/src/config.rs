/// Engine configuration

use crate::log::LogSeverity;

/// Engine-wide settings, stored by `Engine::initialize_with_config()`
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Application name, reported when the engine starts
    pub app_name: String,
    /// Messages below this severity are dropped by `Engine::log()`
    pub min_log_severity: LogSeverity,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            app_name: "Game Engine".to_string(),
            min_log_severity: if cfg!(debug_assertions) {
                LogSeverity::Trace
            } else {
                LogSeverity::Info
            },
        }
    }
}
