//! # Config Crate
//!
//! Centralized configuration constants for the Conway recipe pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON_TOLERANCE, ParallelConfig};
//!
//! // Use EPSILON_TOLERANCE for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-9)
//! let is_zero = value.abs() < EPSILON_TOLERANCE;
//! assert!(is_zero);
//!
//! // Parallel execution settings travel as explicit values
//! let parallel = ParallelConfig::default();
//! assert!(parallel.enabled);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Global State**: runtime settings are explicit values passed at call sites
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
