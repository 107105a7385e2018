//! # Reflect Operator
//!
//! Mirror image: negate every coordinate and reverse every face loop so the
//! windings stay outward. No flag accumulation is needed.

use crate::error::BuildError;
use crate::polyhedron::Polyhedron;

/// Applies the reflect operator.
pub fn reflect(poly: &Polyhedron) -> Result<Polyhedron, BuildError> {
    let vertices = poly.vertices().iter().map(|&v| -v).collect();
    let faces = poly
        .faces()
        .iter()
        .map(|face| face.iter().rev().copied().collect())
        .collect();
    Ok(Polyhedron::from_parts(
        format!("r{}", poly.name()),
        vertices,
        faces,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::create_cube;

    #[test]
    fn test_reflect_preserves_counts() {
        let cube = create_cube();
        let result = reflect(&cube).unwrap();
        assert_eq!(result.vertex_count(), cube.vertex_count());
        assert_eq!(result.face_count(), cube.face_count());
        assert!(result.validate());
    }

    #[test]
    fn test_reflect_negates_and_reverses() {
        let cube = create_cube();
        let result = reflect(&cube).unwrap();
        assert_eq!(result.vertex(0), -cube.vertex(0));
        let reversed: Vec<u32> = cube.face(0).iter().rev().copied().collect();
        assert_eq!(result.face(0), reversed.as_slice());
    }

    #[test]
    fn test_reflect_twice_restores_geometry() {
        let cube = create_cube();
        let twice = reflect(&reflect(&cube).unwrap()).unwrap();
        assert_eq!(twice.vertices(), cube.vertices());
        assert_eq!(twice.faces(), cube.faces());
        assert_eq!(twice.name(), "rrC");
    }
}
