//! # Pyramid Seeds
//!
//! Parametric n-gonal pyramids: a unit-circumradius base with an apex at
//! unit height, shifted so the vertex centroid sits at the origin.

use std::f64::consts::TAU;

use glam::DVec3;

use crate::error::BuildError;
use crate::polyhedron::Polyhedron;

/// Creates the n-gonal pyramid seed (`Y<n>`).
pub fn create_pyramid(sides: u32) -> Result<Polyhedron, BuildError> {
    if sides < 3 {
        return Err(BuildError::base_generation(format!(
            "'Y' needs at least 3 sides, got {sides}"
        )));
    }

    let n = sides as usize;
    // Drop everything so the apex and base average out to the origin.
    let shift = 1.0 / (n + 1) as f64;

    let mut poly = Polyhedron::new(format!("Y{sides}"));
    for i in 0..n {
        let angle = TAU * i as f64 / n as f64;
        poly.add_vertex(DVec3::new(angle.cos(), angle.sin(), -shift));
    }
    let apex = poly.add_vertex(DVec3::new(0.0, 0.0, 1.0 - shift));

    poly.add_face((0..n as u32).rev().collect());
    for i in 0..n as u32 {
        let j = (i + 1) % n as u32;
        poly.add_face(vec![i, j, apex]);
    }

    Ok(poly)
}
