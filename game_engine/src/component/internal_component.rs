//! Components whose concrete type is private to this module.
//!
//! Outside code only ever sees `Box<dyn InternalComponent>` returned by
//! [`create_internal_component`]. The concrete types cannot be named:
//!
//! ```compile_fail
//! use game_engine::game::component::internal_component::InternalLogger;
//! ```

use crate::component::Updatable;
use crate::{engine_debug, engine_info};

/// Updatable component with an explicit lifecycle.
///
/// Starts inactive. `initialize()` activates it, `shutdown()` deactivates
/// it. Both transitions may be repeated or called in any order.
pub trait InternalComponent: Updatable {
    /// Transition to the active state
    fn initialize(&mut self);

    /// Transition to the inactive state
    fn shutdown(&mut self);
}

/// Create a fresh, inactive internal component
///
/// # Example
///
/// ```
/// use game_engine::game::component::{create_internal_component, InternalComponent, Updatable};
///
/// let mut component = create_internal_component();
/// assert!(!component.is_active());
/// component.initialize();
/// assert!(component.is_active());
/// ```
pub fn create_internal_component() -> Box<dyn InternalComponent> {
    Box::new(InternalLogger::new())
}

/// Drive both private components through a short scripted run.
///
/// Returns the counter value after a single one-second update.
pub fn run_internal_self_test() -> i32 {
    let mut logger = InternalLogger::new();
    logger.initialize();
    logger.log("Test message");
    logger.update(0.016);
    logger.shutdown();

    let mut counter = SecretCounter::new();
    counter.update(1.0);

    engine_info!(SecretCounter::SOURCE, "Secret value: {}", counter.value());
    counter.value()
}

// ===== INTERNAL LOGGER =====

/// Queues messages while active and flushes them to the engine log on update
struct InternalLogger {
    log_level: i32,
    pending: Vec<String>,
}

impl InternalLogger {
    const SOURCE: &'static str = "game_engine::InternalLogger";

    fn new() -> Self {
        Self {
            log_level: 0,
            pending: Vec::new(),
        }
    }

    /// Queue a message, dropped when the logger is inactive
    fn log(&mut self, message: impl Into<String>) {
        if self.is_active() {
            self.pending.push(message.into());
        }
    }

    fn set_log_level(&mut self, level: i32) {
        self.log_level = level;
    }
}

impl Updatable for InternalLogger {
    fn update(&mut self, _delta_time: f32) {
        for message in self.pending.drain(..) {
            engine_debug!(Self::SOURCE, "{}", message);
        }
    }

    fn is_active(&self) -> bool {
        self.log_level > 0
    }
}

impl InternalComponent for InternalLogger {
    fn initialize(&mut self) {
        self.set_log_level(1);
    }

    fn shutdown(&mut self) {
        self.set_log_level(0);
        self.pending.clear();
    }
}

// ===== SECRET COUNTER =====

/// Accumulates the whole seconds of every update
struct SecretCounter {
    value: i32,
}

impl SecretCounter {
    const SOURCE: &'static str = "game_engine::SecretCounter";
    const INITIAL_VALUE: i32 = 42;

    fn new() -> Self {
        Self { value: Self::INITIAL_VALUE }
    }

    fn value(&self) -> i32 {
        self.value
    }
}

impl Updatable for SecretCounter {
    fn update(&mut self, delta_time: f32) {
        // `as` truncates toward zero and saturates, NaN maps to 0
        self.value = self.value.saturating_add(delta_time as i32);
    }

    fn is_active(&self) -> bool {
        true
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "internal_component_tests.rs"]
mod tests;
