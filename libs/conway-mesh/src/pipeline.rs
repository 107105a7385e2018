//! # Recipe Pipeline
//!
//! Drives a parsed recipe through the stages: seed generation, the operator
//! chain in application order, then the configured relaxation pass. Each
//! stage either succeeds with a complete model or aborts the build naming
//! the stage that failed.

use config::constants::ParallelConfig;
use conway_recipe::Recipe;

use crate::canon::CanonicalMode;
use crate::error::BuildError;
use crate::ops::Operator;
use crate::polyhedron::Polyhedron;
use crate::primitives;

/// Settings for one build, passed explicitly through every stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    /// Parallel-execution settings forwarded to the executor.
    pub parallel: ParallelConfig,
    /// Relaxation pass applied after the operator chain.
    pub canonical: CanonicalMode,
}

/// Builds a polyhedron from a parsed recipe.
pub fn build_recipe(recipe: &Recipe, options: &BuildOptions) -> Result<Polyhedron, BuildError> {
    let mut poly = primitives::generate(&recipe.seed)?;
    for token in &recipe.ops {
        poly = Operator::from_token(token).apply(&poly, &options.parallel)?;
    }
    options.canonical.apply(poly, &options.parallel)
}
