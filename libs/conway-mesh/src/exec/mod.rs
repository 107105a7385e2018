//! # Chunked Parallel Executor
//!
//! Generic fork-join map over an index range. Work is split into contiguous
//! chunks, one concurrent task per chunk, and the per-chunk results are
//! reassembled in chunk-start order regardless of completion order. Every
//! spawned task is joined before the call returns.
//!
//! Parallelism is governed by an explicit [`ParallelConfig`] value passed at
//! each call site; there is no process-wide switch.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use config::constants::ParallelConfig;
use rayon::prelude::*;

use crate::error::BuildError;

/// A contiguous sub-range `[start, end)` of the index space, processed as one
/// unit of concurrent work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkRange {
    /// First index in the chunk (inclusive).
    pub start: usize,
    /// One past the last index (exclusive).
    pub end: usize,
}

impl ChunkRange {
    /// Number of indices covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// True when the chunk covers no indices.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Iterator over the covered indices.
    pub fn iter(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

/// Maps `work` over `[0, count)` in chunks, returning one result per chunk in
/// ascending chunk-start order.
///
/// Runs sequentially as a single chunk when parallelism is disabled, the
/// workload is below `parallel.min_workload`, or `parallel.max_tasks <= 1`.
/// Otherwise the chunk size is `chunk_size` if given, else derived so the
/// chunk count matches `parallel.max_tasks`.
///
/// The first failing chunk aborts the call; no partial result is returned.
///
/// # Example
///
/// ```rust
/// use config::constants::ParallelConfig;
/// use conway_mesh::exec::for_each_chunk;
///
/// let sums = for_each_chunk(100, Some(25), &ParallelConfig::default(), |range| {
///     Ok(range.iter().sum::<usize>())
/// })
/// .unwrap();
/// assert_eq!(sums.len(), 4);
/// ```
pub fn for_each_chunk<R, F>(
    count: usize,
    chunk_size: Option<usize>,
    parallel: &ParallelConfig,
    work: F,
) -> Result<Vec<R>, BuildError>
where
    R: Send,
    F: Fn(ChunkRange) -> Result<R, BuildError> + Sync,
{
    if !parallel.enabled || count < parallel.min_workload || parallel.max_tasks <= 1 {
        return Ok(vec![work(ChunkRange {
            start: 0,
            end: count,
        })?]);
    }

    let size = chunk_size
        .unwrap_or_else(|| count.div_ceil(parallel.max_tasks))
        .max(1);
    let chunks: Vec<ChunkRange> = (0..count)
        .step_by(size)
        .map(|start| ChunkRange {
            start,
            end: (start + size).min(count),
        })
        .collect();

    match shared_pool(parallel.max_tasks) {
        Some(pool) => pool.install(|| chunks.par_iter().map(|&chunk| work(chunk)).collect()),
        // A pool that cannot be built degrades to the sequential path over
        // the identical chunk list; the reassembled result is the same.
        None => chunks.iter().map(|&chunk| work(chunk)).collect(),
    }
}

/// Returns the cached thread pool for a given task cap, building it on first
/// use. `None` when the pool cannot be built in this environment.
fn shared_pool(max_tasks: usize) -> Option<Arc<rayon::ThreadPool>> {
    static POOLS: OnceLock<Mutex<HashMap<usize, Arc<rayon::ThreadPool>>>> = OnceLock::new();
    let pools = POOLS.get_or_init(|| Mutex::new(HashMap::new()));
    let mut pools = pools.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(pool) = pools.get(&max_tasks) {
        return Some(pool.clone());
    }
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(max_tasks)
        .build()
        .ok()?;
    let pool = Arc::new(pool);
    pools.insert(max_tasks, pool.clone());
    Some(pool)
}
