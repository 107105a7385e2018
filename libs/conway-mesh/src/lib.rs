//! # Conway Mesh
//!
//! Polyhedral mesh generation from Conway recipe notation.
//! Converts a parsed [`Recipe`](conway_recipe::Recipe) into an indexed
//! polyhedron by applying topological operators to a seed solid.
//!
//! ## Architecture
//!
//! ```text
//! conway-recipe (Recipe AST) → conway-mesh (Polyhedron)
//! ```
//!
//! ## Internals
//!
//! - **Reconstruction**: operators emit named vertices and oriented face
//!   edges into a [`topo::FlagSet`]; reconstruction stitches the indexed
//!   mesh back together
//! - **Operators**: dual, ambo, kis, gyro, reflect over face loops
//! - **Execution**: chunked fork-join via [`exec::for_each_chunk`], with
//!   accelerated/portable strategy pairs behind [`accel::run_with_fallback`]
//! - **Canonicalization**: iterative mesh/dual relaxation
//!
//! ## Usage
//!
//! ```rust
//! use conway_mesh::{compile_recipe, BuildOptions};
//!
//! let poly = compile_recipe("dakC", &BuildOptions::default()).unwrap();
//! assert!(poly.vertex_count() > 0);
//! ```

pub mod accel;
pub mod canon;
pub mod error;
pub mod exec;
pub mod ops;
pub mod pipeline;
pub mod polyhedron;
pub mod primitives;
pub mod topo;

pub use canon::CanonicalMode;
pub use error::{AccelError, BuildError};
pub use pipeline::{build_recipe, BuildOptions};
pub use polyhedron::{MeshBuffers, Polyhedron};

/// Compiles a recipe string and builds its polyhedron.
///
/// This is the main entry point for the pipeline.
///
/// # Arguments
///
/// * `source` - Recipe text, e.g. `"dakC"`
/// * `options` - Parallelism and relaxation settings
///
/// # Returns
///
/// The finished polyhedron, or the error of whichever stage failed.
///
/// # Example
///
/// ```rust
/// use conway_mesh::{compile_recipe, BuildOptions};
///
/// let poly = compile_recipe("aC", &BuildOptions::default()).unwrap();
/// assert_eq!(poly.vertex_count(), 12);
/// assert_eq!(poly.face_count(), 14);
/// ```
pub fn compile_recipe(source: &str, options: &BuildOptions) -> Result<Polyhedron, BuildError> {
    let recipe = conway_recipe::parse(source)?;
    pipeline::build_recipe(&recipe, options)
}
