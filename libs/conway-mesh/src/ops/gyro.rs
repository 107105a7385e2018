//! # Gyro Operator
//!
//! Each face contributes a centroid vertex and, per directed edge, a point
//! one third of the way along it; original vertices survive. Every face
//! corner then becomes a pentagon: centroid, two one-third points, the
//! corner vertex, and the one-third point leaving it. Positions are pushed
//! onto the unit sphere, as the classic construction does.

use crate::error::BuildError;
use crate::polyhedron::Polyhedron;
use crate::topo::FlagSet;

/// Directional one-third-point name: `a~b` lies a third of the way from `a`
/// toward `b`, and is distinct from `b~a`.
fn third_name(a: u32, b: u32) -> String {
    format!("{a}~{b}")
}

/// Applies the gyro operator.
pub fn gyro(poly: &Polyhedron) -> Result<Polyhedron, BuildError> {
    let mut flags = FlagSet::new();

    for (index, position) in poly.vertices().iter().enumerate() {
        flags.register_vertex(&format!("v{index}"), position.normalize_or_zero());
    }

    for (face_index, face) in poly.faces().iter().enumerate() {
        flags.register_vertex(
            &format!("c{face_index}"),
            poly.face_centroid(face_index).normalize_or_zero(),
        );
        for (i, &v1) in face.iter().enumerate() {
            let v2 = face[(i + 1) % face.len()];
            let v3 = face[(i + 2) % face.len()];
            let a = poly.vertex(v1);
            let b = poly.vertex(v2);
            flags.register_vertex(&third_name(v1, v2), (a + (b - a) / 3.0).normalize_or_zero());

            let name = format!("f{face_index}c{v1}");
            let center = format!("c{face_index}");
            flags.register_edge(&name, &center, &third_name(v1, v2));
            flags.register_edge(&name, &third_name(v1, v2), &third_name(v2, v1));
            flags.register_edge(&name, &third_name(v2, v1), &format!("v{v2}"));
            flags.register_edge(&name, &format!("v{v2}"), &third_name(v2, v3));
            flags.register_edge(&name, &third_name(v2, v3), &center);
        }
    }

    let mut result = flags.reconstruct();
    result.set_name(format!("g{}", poly.name()));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{create_cube, create_tetrahedron};

    #[test]
    fn test_gyro_cube_is_pentagonal_icositetrahedron() {
        let result = gyro(&create_cube()).unwrap();
        // 8 originals + 6 centroids + 2 per edge on 12 edges.
        assert_eq!(result.vertex_count(), 38);
        assert_eq!(result.face_count(), 24);
        assert!(result.faces().iter().all(|f| f.len() == 5));
        assert!(result.validate());
    }

    #[test]
    fn test_gyro_tetrahedron_counts() {
        let result = gyro(&create_tetrahedron()).unwrap();
        // 4 + 4 + 12 vertices; one pentagon per corner of 4 triangles.
        assert_eq!(result.vertex_count(), 20);
        assert_eq!(result.face_count(), 12);
    }

    #[test]
    fn test_gyro_pushes_vertices_to_unit_sphere() {
        let result = gyro(&create_cube()).unwrap();
        for v in result.vertices() {
            assert!((v.length() - 1.0).abs() < 1.0e-12);
        }
    }
}
