//! # Kis Operator
//!
//! Raises an apex vertex above each selected face and replaces the face with
//! a fan of triangles; unselected faces are re-emitted unchanged. With a
//! side-count parameter, only faces of exactly that degree are selected.

use config::constants::DEFAULT_KIS_APEX_OFFSET;

use crate::error::BuildError;
use crate::polyhedron::Polyhedron;
use crate::topo::FlagSet;

/// Applies the kis operator.
pub fn kis(poly: &Polyhedron, sides: Option<u32>) -> Result<Polyhedron, BuildError> {
    let mut flags = FlagSet::new();

    for (index, position) in poly.vertices().iter().enumerate() {
        flags.register_vertex(&format!("v{index}"), *position);
    }

    for (face_index, face) in poly.faces().iter().enumerate() {
        let selected = sides.map_or(true, |n| face.len() == n as usize);
        if selected {
            let apex = poly.face_centroid(face_index)
                + poly.face_normal(face_index).normalize_or_zero() * DEFAULT_KIS_APEX_OFFSET;
            let apex_name = format!("apex{face_index}");
            flags.register_vertex(&apex_name, apex);
            for (i, &v1) in face.iter().enumerate() {
                let v2 = face[(i + 1) % face.len()];
                // Corner-scoped face name: no collisions across faces.
                let name = format!("f{face_index}v{v1}");
                flags.register_edge(&name, &format!("v{v1}"), &format!("v{v2}"));
                flags.register_edge(&name, &format!("v{v2}"), &apex_name);
                flags.register_edge(&name, &apex_name, &format!("v{v1}"));
            }
        } else {
            let name = format!("f{face_index}");
            for (i, &v1) in face.iter().enumerate() {
                let v2 = face[(i + 1) % face.len()];
                flags.register_edge(&name, &format!("v{v1}"), &format!("v{v2}"));
            }
        }
    }

    let mut result = flags.reconstruct();
    let tag = match sides {
        Some(n) => format!("k{n}"),
        None => "k".to_string(),
    };
    result.set_name(format!("{tag}{}", poly.name()));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{create_cube, create_prism};

    #[test]
    fn test_kis_cube_counts() {
        let result = kis(&create_cube(), None).unwrap();
        // 8 originals + 6 apexes; 6 quads fanned into 4 triangles each.
        assert_eq!(result.vertex_count(), 14);
        assert_eq!(result.face_count(), 24);
        assert!(result.faces().iter().all(|f| f.len() == 3));
        assert!(result.validate());
    }

    #[test]
    fn test_kis_with_filter_leaves_other_faces() {
        let prism = create_prism(6).unwrap();
        // Raise only the two hexagonal caps.
        let result = kis(&prism, Some(6)).unwrap();
        assert_eq!(result.vertex_count(), prism.vertex_count() + 2);
        // 2 caps become 6 triangles each; 6 squares survive.
        assert_eq!(result.face_count(), 12 + 6);
        assert_eq!(result.name(), "k6P6");
    }

    #[test]
    fn test_kis_with_unmatched_filter_is_identity_on_counts() {
        let cube = create_cube();
        let result = kis(&cube, Some(7)).unwrap();
        assert_eq!(result.vertex_count(), cube.vertex_count());
        assert_eq!(result.face_count(), cube.face_count());
    }
}
