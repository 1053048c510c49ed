//! Unit tests for internal_component.rs
//!
//! The private component types are reachable here because this is a child
//! module of internal_component.

use super::*;
use crate::game::{Engine, EngineConfig};
use crate::game::log::{Logger, LogEntry, LogSeverity};
use std::sync::{Arc, Mutex};
use serial_test::serial;

// ============================================================================
// TEST HELPERS
// ============================================================================

/// Captures entries from one source only, so logs emitted by tests running
/// in parallel do not leak into assertions
struct SourceCapture {
    source: &'static str,
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl SourceCapture {
    fn install(source: &'static str) -> Arc<Mutex<Vec<LogEntry>>> {
        let entries = Arc::new(Mutex::new(Vec::new()));
        Engine::set_logger(Self { source, entries: entries.clone() });
        entries
    }
}

impl Logger for SourceCapture {
    fn log(&self, entry: &LogEntry) {
        if entry.source == self.source {
            self.entries.lock().unwrap().push(entry.clone());
        }
    }
}

/// Let every severity through regardless of the build profile's default threshold
fn enable_all_severities() {
    Engine::reset_for_testing();
    Engine::initialize_with_config(EngineConfig {
        min_log_severity: LogSeverity::Trace,
        ..Default::default()
    }).unwrap();
}

// ============================================================================
// FACTORY / LIFECYCLE TESTS
// ============================================================================

#[test]
fn test_factory_returns_inactive_component() {
    let component = create_internal_component();
    assert!(!component.is_active());
}

#[test]
fn test_initialize_then_shutdown() {
    let mut component = create_internal_component();

    component.initialize();
    assert!(component.is_active());

    component.shutdown();
    assert!(!component.is_active());
}

#[test]
fn test_shutdown_before_initialize_stays_inactive() {
    let mut component = create_internal_component();
    component.shutdown();
    assert!(!component.is_active());
}

#[test]
fn test_transitions_are_idempotent() {
    let mut component = create_internal_component();

    component.initialize();
    component.initialize();
    assert!(component.is_active());

    component.shutdown();
    component.shutdown();
    assert!(!component.is_active());

    // Re-activation after shutdown is allowed
    component.initialize();
    assert!(component.is_active());
}

#[test]
fn test_update_does_not_change_activity() {
    let mut component = create_internal_component();
    component.update(0.016);
    assert!(!component.is_active());

    component.initialize();
    for delta in [0.0, -1.0, f32::INFINITY, f32::NAN] {
        component.update(delta);
    }
    assert!(component.is_active());
}

#[test]
fn test_factory_returns_independent_instances() {
    let mut a = create_internal_component();
    let b = create_internal_component();

    a.initialize();
    assert!(a.is_active());
    assert!(!b.is_active());
}

// ============================================================================
// INTERNAL LOGGER TESTS
// ============================================================================

#[test]
fn test_set_log_level_controls_activity() {
    let mut logger = InternalLogger::new();
    logger.set_log_level(3);
    assert!(logger.is_active());
    logger.set_log_level(-1);
    assert!(!logger.is_active());
}

#[test]
fn test_log_is_dropped_while_inactive() {
    let mut logger = InternalLogger::new();
    logger.log("ignored");
    assert!(logger.pending.is_empty());
}

#[test]
fn test_shutdown_discards_pending_messages() {
    let mut logger = InternalLogger::new();
    logger.initialize();
    logger.log("first");
    logger.log("second");
    assert_eq!(logger.pending.len(), 2);

    logger.shutdown();
    assert!(logger.pending.is_empty());
}

#[test]
#[serial]
fn test_update_flushes_queue_to_engine_log() {
    enable_all_severities();
    let entries = SourceCapture::install(InternalLogger::SOURCE);

    let mut logger = InternalLogger::new();
    logger.initialize();
    logger.log("loading level");
    logger.log("level loaded");
    logger.update(0.016);
    logger.update(0.016);

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].message, "loading level");
        assert_eq!(captured[1].message, "level loaded");
        assert!(captured.iter().all(|e| e.severity == LogSeverity::Debug));
    }
    assert!(logger.pending.is_empty());

    Engine::reset_logger();
    Engine::reset_for_testing();
}

// ============================================================================
// SECRET COUNTER TESTS
// ============================================================================

#[test]
fn test_counter_starts_at_initial_value() {
    let counter = SecretCounter::new();
    assert_eq!(counter.value(), 42);
}

#[test]
fn test_counter_is_always_active() {
    let mut counter = SecretCounter::new();
    assert!(counter.is_active());
    counter.update(-100.0);
    assert!(counter.is_active());
    counter.update(f32::NAN);
    assert!(counter.is_active());
}

#[test]
fn test_counter_adds_truncated_delta() {
    let mut counter = SecretCounter::new();
    let start = counter.value();

    counter.update(1.0);
    assert_eq!(counter.value(), start + 1);

    counter.update(2.5);
    assert_eq!(counter.value(), start + 3);

    // Sub-second frames never accumulate
    counter.update(0.016);
    counter.update(0.99);
    assert_eq!(counter.value(), start + 3);
}

#[test]
fn test_counter_truncates_toward_zero() {
    let mut counter = SecretCounter::new();
    counter.update(-1.7);
    assert_eq!(counter.value(), 41);
}

#[test]
fn test_counter_saturates_on_infinite_delta() {
    let mut counter = SecretCounter::new();
    counter.update(f32::INFINITY);
    assert_eq!(counter.value(), i32::MAX);
    counter.update(f32::NAN);
    assert_eq!(counter.value(), i32::MAX);
}

#[test]
fn test_counters_are_independent() {
    let mut a = SecretCounter::new();
    let mut b = SecretCounter::new();

    a.update(1.0);
    b.update(5.0);
    a.update(2.5);

    assert_eq!(a.value(), 45);
    assert_eq!(b.value(), 47);
}

// ============================================================================
// SELF TEST
// ============================================================================

#[test]
#[serial]
fn test_self_test_reports_secret_value() {
    enable_all_severities();
    let entries = SourceCapture::install(SecretCounter::SOURCE);

    assert_eq!(run_internal_self_test(), 43);

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[0].message, "Secret value: 43");
    }

    Engine::reset_logger();
    Engine::reset_for_testing();
}
