//! # Ambo Operator
//!
//! Rectification: every original edge contributes one vertex at its
//! midpoint; every original face shrinks to the loop of its edge midpoints,
//! and every original vertex grows a new face from the midpoints of its
//! incident edges. Both face families are emitted as flags and closed by
//! reconstruction - the vertex faces are never walked explicitly.

use crate::error::BuildError;
use crate::polyhedron::Polyhedron;
use crate::topo::FlagSet;

/// Canonical midpoint name: both faces sharing an edge agree on it.
fn midpoint_name(a: u32, b: u32) -> String {
    format!("{}_{}", a.min(b), a.max(b))
}

/// Applies the ambo operator.
pub fn ambo(poly: &Polyhedron) -> Result<Polyhedron, BuildError> {
    let mut flags = FlagSet::new();

    for (face_index, face) in poly.faces().iter().enumerate() {
        for (i, &v1) in face.iter().enumerate() {
            let v2 = face[(i + 1) % face.len()];
            let v3 = face[(i + 2) % face.len()];
            let mid12 = midpoint_name(v1, v2);
            let mid23 = midpoint_name(v2, v3);
            flags.register_vertex(&mid12, (poly.vertex(v1) + poly.vertex(v2)) / 2.0);
            // The shrunken face keeps the original winding; the vertex face
            // winds the other way so it faces outward.
            flags.register_edge(&format!("f{face_index}"), &mid12, &mid23);
            flags.register_edge(&format!("v{v2}"), &mid23, &mid12);
        }
    }

    let mut result = flags.reconstruct();
    result.set_name(format!("a{}", poly.name()));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{create_cube, create_tetrahedron};

    #[test]
    fn test_ambo_cube_counts() {
        let result = ambo(&create_cube()).unwrap();
        // One vertex per original edge; one face per original face plus one
        // per original vertex.
        assert_eq!(result.vertex_count(), 12);
        assert_eq!(result.face_count(), 14);
        assert!(result.validate());
    }

    #[test]
    fn test_ambo_cube_face_degrees() {
        let result = ambo(&create_cube()).unwrap();
        let squares = result.faces().iter().filter(|f| f.len() == 4).count();
        let triangles = result.faces().iter().filter(|f| f.len() == 3).count();
        assert_eq!(squares, 6);
        assert_eq!(triangles, 8);
    }

    #[test]
    fn test_ambo_tetrahedron_is_octahedral() {
        let result = ambo(&create_tetrahedron()).unwrap();
        assert_eq!(result.vertex_count(), 6);
        assert_eq!(result.face_count(), 8);
    }

    #[test]
    fn test_ambo_prefixes_name() {
        let result = ambo(&create_cube()).unwrap();
        assert_eq!(result.name(), "aC");
    }
}
