//! # Canonicalization
//!
//! Iterative geometric relaxation toward a normalized configuration, with
//! topology frozen: only coordinates move. Both variants alternate between
//! the mesh and its dual - the dual's vertex array is replaced by reciprocal
//! points derived from the mesh's faces, then the mesh's vertex array by
//! reciprocal points derived from the dual's faces.
//!
//! The "adjust" variant reciprocates face centroids. The "canonicalize"
//! variant reciprocates the centroid projected onto the averaged face
//! normal, scaled by the mean edge-tangency distance, which keeps edges
//! tangent to the unit sphere and is the stabler normalization.
//!
//! Per-face work runs through the chunked executor; the reciprocal map runs
//! through the accelerator fallback wrapper.

use config::constants::ParallelConfig;
use glam::DVec3;

use crate::accel;
use crate::error::BuildError;
use crate::exec::for_each_chunk;
use crate::ops::dual::dual;
use crate::polyhedron::Polyhedron;

/// Which relaxation pass, if any, the pipeline runs after the operator chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CanonicalMode {
    /// No relaxation.
    #[default]
    None,
    /// Reciprocal-centroid relaxation for the given iteration count.
    Adjust(u32),
    /// Edge-tangency relaxation for the given iteration count.
    Canonicalize(u32),
}

impl CanonicalMode {
    /// Runs the selected pass over a model.
    pub fn apply(
        &self,
        poly: Polyhedron,
        parallel: &ParallelConfig,
    ) -> Result<Polyhedron, BuildError> {
        match *self {
            CanonicalMode::None => Ok(poly),
            CanonicalMode::Adjust(iterations) => adjust(&poly, iterations, parallel),
            CanonicalMode::Canonicalize(iterations) => canonicalize(&poly, iterations, parallel),
        }
    }
}

/// Relaxes a model by reciprocating face centroids.
pub fn adjust(
    poly: &Polyhedron,
    iterations: u32,
    parallel: &ParallelConfig,
) -> Result<Polyhedron, BuildError> {
    relax(poly, iterations, parallel, Reciprocals::Centers)
}

/// Relaxes a model toward edge tangency with the unit sphere.
pub fn canonicalize(
    poly: &Polyhedron,
    iterations: u32,
    parallel: &ParallelConfig,
) -> Result<Polyhedron, BuildError> {
    relax(poly, iterations, parallel, Reciprocals::Normals)
}

/// How a face is condensed to the point that gets reciprocated.
#[derive(Debug, Clone, Copy)]
enum Reciprocals {
    /// Plain face centroid.
    Centers,
    /// Centroid projected onto the averaged normal, scaled by mean edge
    /// tangency.
    Normals,
}

fn relax(
    poly: &Polyhedron,
    iterations: u32,
    parallel: &ParallelConfig,
    mode: Reciprocals,
) -> Result<Polyhedron, BuildError> {
    let mut poly = poly.clone();
    if iterations == 0 {
        return Ok(poly);
    }

    let mut dual_poly = dual(&poly, parallel)
        .map_err(|err| BuildError::canonicalization(err.to_string()))?;
    if dual_poly.vertex_count() != poly.face_count()
        || dual_poly.face_count() != poly.vertex_count()
    {
        return Err(BuildError::canonicalization(format!(
            "dual of '{}' is not a clean face/vertex exchange; input is degenerate",
            poly.name()
        )));
    }

    for _ in 0..iterations {
        *dual_poly.vertices_mut() = face_reciprocals(&poly, mode, parallel)?;
        *poly.vertices_mut() = face_reciprocals(&dual_poly, mode, parallel)?;
    }

    if !poly.vertices().iter().all(|v| v.is_finite()) {
        return Err(BuildError::canonicalization(
            "relaxation diverged to non-finite coordinates",
        ));
    }

    Ok(poly)
}

/// One reciprocal point per face, in face order.
fn face_reciprocals(
    poly: &Polyhedron,
    mode: Reciprocals,
    parallel: &ParallelConfig,
) -> Result<Vec<DVec3>, BuildError> {
    let chunks = for_each_chunk(poly.face_count(), None, parallel, |range| {
        let mut points = Vec::with_capacity(range.len());
        let mut scales = Vec::with_capacity(range.len());
        for face in range.iter() {
            match mode {
                Reciprocals::Centers => {
                    points.push(poly.face_centroid(face));
                    scales.push(1.0);
                }
                Reciprocals::Normals => {
                    let centroid = poly.face_centroid(face);
                    let normal = poly.face_normal(face).normalize_or_zero();
                    points.push(normal * centroid.dot(normal));
                    scales.push((1.0 + mean_edge_distance(poly, face)) / 2.0);
                }
            }
        }
        Ok((points, scales))
    })?;

    let mut points = Vec::with_capacity(poly.face_count());
    let mut scales = Vec::with_capacity(poly.face_count());
    for (chunk_points, chunk_scales) in chunks {
        points.extend(chunk_points);
        scales.extend(chunk_scales);
    }

    let reciprocals = accel::reciprocals(&points, parallel)
        .map_err(|err| BuildError::canonicalization(err.to_string()))?;

    Ok(reciprocals
        .into_iter()
        .zip(scales)
        .map(|(point, scale)| point * scale)
        .collect())
}

/// Mean distance from the origin to the face's edge lines.
fn mean_edge_distance(poly: &Polyhedron, face: usize) -> f64 {
    let loop_indices = poly.face(face);
    let mut total = 0.0;
    for (i, &v) in loop_indices.iter().enumerate() {
        let a = poly.vertex(v);
        let b = poly.vertex(loop_indices[(i + 1) % loop_indices.len()]);
        total += tangent_point(a, b).length();
    }
    total / loop_indices.len() as f64
}

/// The point on the line through `a` and `b` closest to the origin.
fn tangent_point(a: DVec3, b: DVec3) -> DVec3 {
    let direction = b - a;
    let length_squared = direction.length_squared();
    if length_squared <= f64::EPSILON {
        return a;
    }
    a - direction * (a.dot(direction) / length_squared)
}

#[cfg(test)]
mod tests;
