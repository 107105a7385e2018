//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
#[test]
fn default_constants_are_valid() {
    let cfg = ParallelConfig::default();
    assert!(cfg.enabled);
    assert!(cfg.min_workload >= 1);
    assert!(cfg.max_tasks >= 1);
    assert!(EPSILON_TOLERANCE > 0.0);
    assert!(MAX_FACE_WALK_STEPS >= 3);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        ParallelConfig::new(true, 0, 4).unwrap_err(),
        ConfigError::InvalidMinWorkload(0)
    );
    assert_eq!(
        ParallelConfig::new(true, 32, 0).unwrap_err(),
        ConfigError::InvalidMaxTasks(0)
    );
}

/// The sequential preset must disable splitting entirely.
#[test]
fn sequential_preset_disables_parallelism() {
    let cfg = ParallelConfig::sequential();
    assert!(!cfg.enabled);
    assert_eq!(cfg.max_tasks, 1);
}
