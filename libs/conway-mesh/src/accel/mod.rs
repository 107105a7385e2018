//! # Accelerated Compute with Portable Fallback
//!
//! Pairs a primary (accelerated) compute strategy with a portable reference
//! strategy sharing the same contract. The primary runs first; if it fails
//! with a resource-class error the portable strategy runs instead and its
//! result is returned. Any other error propagates unchanged.
//!
//! Compiled kernels are held in a [`KernelCache`]: at most one compilation
//! per kernel identity is in flight at a time, and concurrent requesters
//! share the single compiled artifact.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use config::constants::{EPSILON_TOLERANCE, ParallelConfig};
use glam::DVec3;
use rayon::prelude::*;

use crate::error::AccelError;

/// Runs `primary`, substituting `portable` on resource-class failure.
///
/// The primary's partial work is discarded before the fallback runs; callers
/// never observe output from both strategies.
///
/// # Example
///
/// ```rust
/// use conway_mesh::accel::run_with_fallback;
/// use conway_mesh::error::AccelError;
///
/// let out = run_with_fallback(
///     || Err(AccelError::DeviceUnavailable("no device".into())),
///     || Ok(42),
/// )
/// .unwrap();
/// assert_eq!(out, 42);
/// ```
pub fn run_with_fallback<T>(
    primary: impl FnOnce() -> Result<T, AccelError>,
    portable: impl FnOnce() -> Result<T, AccelError>,
) -> Result<T, AccelError> {
    match primary() {
        Ok(value) => Ok(value),
        Err(err) if err.is_resource() => portable(),
        Err(err) => Err(err),
    }
}

/// Coordinating cache for compiled kernels, keyed by kernel identity.
///
/// Each identity owns one slot guarded by its own lock: the first requester
/// compiles while later requesters for the same identity block on the slot
/// and then share the compiled artifact. A failed compilation leaves the slot
/// empty, so the next requester retries.
pub struct KernelCache<K> {
    slots: Mutex<HashMap<&'static str, Arc<Mutex<Option<Arc<K>>>>>>,
}

impl<K> KernelCache<K> {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the compiled kernel for `id`, compiling it via `compile` if
    /// this is the first request.
    pub fn get_or_compile(
        &self,
        id: &'static str,
        compile: impl FnOnce() -> Result<K, AccelError>,
    ) -> Result<Arc<K>, AccelError> {
        let slot = {
            let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
            slots.entry(id).or_default().clone()
        };

        // Single-flight: concurrent requesters for this id queue here.
        let mut slot = slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(kernel) = slot.as_ref() {
            return Ok(kernel.clone());
        }
        let kernel = Arc::new(compile()?);
        *slot = Some(kernel.clone());
        Ok(kernel)
    }

    /// Number of kernel identities with a compiled artifact.
    pub fn compiled_count(&self) -> usize {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        slots
            .values()
            .filter(|slot| {
                slot.lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .is_some()
            })
            .count()
    }
}

impl<K> Default for KernelCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// A compiled compute kernel: a dedicated thread pool sized for the
/// accelerated strategy.
pub struct ComputePool {
    pool: rayon::ThreadPool,
}

impl ComputePool {
    fn build(threads: usize) -> Result<Self, AccelError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|err| AccelError::DeviceUnavailable(err.to_string()))?;
        Ok(Self { pool })
    }
}

fn reciprocal_kernels() -> &'static KernelCache<ComputePool> {
    static KERNELS: OnceLock<KernelCache<ComputePool>> = OnceLock::new();
    KERNELS.get_or_init(KernelCache::new)
}

/// Maps a point to its reciprocal `p / |p|²`; the zero vector maps to zero.
pub fn reciprocal(point: DVec3) -> DVec3 {
    let magnitude_squared = point.length_squared();
    if magnitude_squared <= EPSILON_TOLERANCE {
        DVec3::ZERO
    } else {
        point / magnitude_squared
    }
}

/// Accelerated reciprocal strategy: runs on the compiled compute pool.
///
/// Fails with a resource-class error when parallel execution is disabled or
/// the pool cannot be built, letting the fallback wrapper substitute
/// [`reciprocals_portable`].
pub fn reciprocals_accelerated(
    points: &[DVec3],
    parallel: &ParallelConfig,
) -> Result<Vec<DVec3>, AccelError> {
    if !parallel.enabled || parallel.max_tasks <= 1 {
        return Err(AccelError::KernelUnavailable(
            "parallel execution disabled".to_string(),
        ));
    }
    let kernel = reciprocal_kernels()
        .get_or_compile("reciprocal", || ComputePool::build(parallel.max_tasks))?;
    Ok(kernel
        .pool
        .install(|| points.par_iter().map(|&p| reciprocal(p)).collect()))
}

/// Portable reciprocal strategy: a plain scalar loop with the same contract
/// as [`reciprocals_accelerated`].
pub fn reciprocals_portable(points: &[DVec3]) -> Result<Vec<DVec3>, AccelError> {
    Ok(points.iter().map(|&p| reciprocal(p)).collect())
}

/// Reciprocal map behind the fallback wrapper; this is what the
/// canonicalizer calls.
pub fn reciprocals(points: &[DVec3], parallel: &ParallelConfig) -> Result<Vec<DVec3>, AccelError> {
    run_with_fallback(
        || reciprocals_accelerated(points, parallel),
        || reciprocals_portable(points),
    )
}
