//! # Dual Operator
//!
//! For each face, one new vertex at its centroid; for each original vertex,
//! one new face connecting the centroids of the faces touching it, in cyclic
//! order. The adjacency walk runs over a directed-edge-to-face map; walks
//! that leave the mesh (open boundaries) or exceed the step guard are
//! discarded rather than reported.
//!
//! After reconstruction each dual face is re-paired with the original vertex
//! it surrounds, by name where possible and by geometric triple-face
//! intersection where the name is inconclusive. Faces that cannot be paired
//! are dropped; the result is always a best-effort mesh, never an error.

use std::collections::HashMap;

use config::constants::{MAX_FACE_WALK_STEPS, ParallelConfig};
use glam::DVec3;

use crate::error::BuildError;
use crate::exec::for_each_chunk;
use crate::polyhedron::Polyhedron;
use crate::topo::FlagSet;

/// Applies the dual operator.
pub fn dual(poly: &Polyhedron, parallel: &ParallelConfig) -> Result<Polyhedron, BuildError> {
    // Directed edge (u, v) -> the face whose loop contains u immediately
    // before v. O(total loop length).
    let mut edge_to_face: HashMap<(u32, u32), u32> = HashMap::new();
    // Any face containing each vertex, as a walk starting point.
    let mut start_face: Vec<Option<u32>> = vec![None; poly.vertex_count()];
    for (face_index, face) in poly.faces().iter().enumerate() {
        for (i, &u) in face.iter().enumerate() {
            let v = face[(i + 1) % face.len()];
            edge_to_face.insert((u, v), face_index as u32);
            if start_face[u as usize].is_none() {
                start_face[u as usize] = Some(face_index as u32);
            }
        }
    }

    let centroid_chunks = for_each_chunk(poly.face_count(), None, parallel, |range| {
        Ok(range
            .iter()
            .map(|face| poly.face_centroid(face))
            .collect::<Vec<_>>())
    })?;
    let centroids: Vec<DVec3> = centroid_chunks.into_iter().flatten().collect();

    let mut flags = FlagSet::new();
    // Centroid vertices first, in face order, so dual vertex i is the
    // centroid of face i.
    for (face_index, centroid) in centroids.iter().enumerate() {
        flags.register_vertex(&face_index.to_string(), *centroid);
    }

    for vertex in 0..poly.vertex_count() as u32 {
        let Some(first) = start_face[vertex as usize] else {
            continue;
        };
        if let Some(ring) = face_ring(poly, &edge_to_face, vertex, first) {
            let face_name = format!("v{vertex}");
            for (i, &face) in ring.iter().enumerate() {
                let next = ring[(i + 1) % ring.len()];
                flags.register_edge(&face_name, &face.to_string(), &next.to_string());
            }
        }
    }

    let (reconstructed, names) = flags.reconstruct_named();
    let (_, vertices, faces) = reconstructed.into_parts();
    let paired = pair_faces(poly, &vertices, faces, &names);

    Ok(Polyhedron::from_parts(
        toggle_dual_tag(poly.name()),
        vertices,
        paired,
    ))
}

/// Walks the faces around `vertex` starting from `first`, in cyclic order.
///
/// Returns `None` when the ring does not close (open boundary) or the step
/// guard trips on malformed input.
fn face_ring(
    poly: &Polyhedron,
    edge_to_face: &HashMap<(u32, u32), u32>,
    vertex: u32,
    first: u32,
) -> Option<Vec<u32>> {
    let mut ring = Vec::new();
    let mut current = first;
    for _ in 0..MAX_FACE_WALK_STEPS {
        // The vertex immediately preceding `vertex` in the current loop.
        let face = poly.face(current as usize);
        let at = face.iter().position(|&v| v == vertex)?;
        let previous = face[(at + face.len() - 1) % face.len()];
        // The reversed edge belongs to the adjacent face.
        let &next = edge_to_face.get(&(vertex, previous))?;
        ring.push(current);
        current = next;
        if current == first {
            return if ring.len() >= 3 { Some(ring) } else { None };
        }
    }
    None
}

/// Re-pairs reconstructed dual faces with the original vertex each surrounds
/// and orders them by that vertex index.
///
/// A face name of the form `v<index>` pairs directly. When the name is
/// inconclusive the pairing falls back to geometry: the face's first three
/// centroid indices name three original faces, and their unique common
/// vertex (if any) claims the face. Unpairable faces, and second claims on
/// an already-claimed vertex, are dropped.
fn pair_faces(
    poly: &Polyhedron,
    dual_vertices: &[DVec3],
    faces: Vec<Vec<u32>>,
    names: &[String],
) -> Vec<Vec<u32>> {
    let mut claimed: Vec<Option<Vec<u32>>> = vec![None; poly.vertex_count()];

    for (face, name) in faces.into_iter().zip(names) {
        let vertex = match pair_by_name(poly, name) {
            Some(vertex) => Some(vertex),
            None => pair_by_geometry(poly, dual_vertices, &face),
        };
        if let Some(vertex) = vertex {
            let slot = &mut claimed[vertex as usize];
            if slot.is_none() {
                *slot = Some(face);
            }
        }
    }

    claimed.into_iter().flatten().collect()
}

fn pair_by_name(poly: &Polyhedron, name: &str) -> Option<u32> {
    let index: u32 = name.strip_prefix('v')?.parse().ok()?;
    (index < poly.vertex_count() as u32).then_some(index)
}

fn pair_by_geometry(poly: &Polyhedron, dual_vertices: &[DVec3], face: &[u32]) -> Option<u32> {
    if face.len() < 3 {
        return None;
    }
    // Each dual vertex is a face centroid registered in face order, so the
    // centroid index names the original face directly when counts line up;
    // otherwise the face cannot be resolved.
    if dual_vertices.len() != poly.face_count() {
        return None;
    }
    let mut common: Vec<u32> = poly.face(face[0] as usize).to_vec();
    for &centroid in &face[1..3] {
        let loop_indices = poly.face(centroid as usize);
        common.retain(|v| loop_indices.contains(v));
    }
    match common.as_slice() {
        &[vertex] => Some(vertex),
        _ => None,
    }
}

/// Toggles the dual tag on a model name: strip a leading `d`, otherwise
/// prepend one. The bare tag itself is left unchanged.
pub fn toggle_dual_tag(name: &str) -> String {
    // The bare tag has nothing to strip down to.
    if name == "d" {
        return name.to_string();
    }
    match name.strip_prefix('d') {
        Some(stripped) => stripped.to_string(),
        None => format!("d{name}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{create_cube, create_tetrahedron};

    fn sequential() -> ParallelConfig {
        ParallelConfig::sequential()
    }

    #[test]
    fn test_dual_of_cube_is_octahedral() {
        let cube = create_cube();
        let dual_cube = dual(&cube, &sequential()).unwrap();
        assert_eq!(dual_cube.vertex_count(), 6);
        assert_eq!(dual_cube.face_count(), 8);
        assert!(dual_cube.faces().iter().all(|f| f.len() == 3));
        assert!(dual_cube.validate());
    }

    #[test]
    fn test_dual_of_dual_round_trips_counts() {
        let cube = create_cube();
        let once = dual(&cube, &sequential()).unwrap();
        let twice = dual(&once, &sequential()).unwrap();
        assert_eq!(twice.vertex_count(), 8);
        assert_eq!(twice.face_count(), 6);
        assert!(twice.faces().iter().all(|f| f.len() == 4));
    }

    #[test]
    fn test_dual_faces_are_ordered_by_source_vertex() {
        let tetra = create_tetrahedron();
        let dual_tetra = dual(&tetra, &sequential()).unwrap();
        // One dual face per original vertex, in vertex order; each face lists
        // centroids of the three faces touching that vertex.
        assert_eq!(dual_tetra.face_count(), tetra.vertex_count());
        for (vertex, face) in dual_tetra.faces().iter().enumerate() {
            for &centroid in face {
                assert!(tetra
                    .face(centroid as usize)
                    .contains(&(vertex as u32)));
            }
        }
    }

    #[test]
    fn test_dual_name_toggle() {
        assert_eq!(toggle_dual_tag("C"), "dC");
        assert_eq!(toggle_dual_tag("aC"), "daC");
        assert_eq!(toggle_dual_tag("daC"), "aC");
        assert_eq!(toggle_dual_tag("d"), "d");
    }

    #[test]
    fn test_dual_drops_open_boundary_rings() {
        // A single square face: every vertex ring is open.
        let mut poly = Polyhedron::new("open");
        poly.add_vertex(DVec3::ZERO);
        poly.add_vertex(DVec3::X);
        poly.add_vertex(DVec3::new(1.0, 1.0, 0.0));
        poly.add_vertex(DVec3::Y);
        poly.add_face(vec![0, 1, 2, 3]);
        let result = dual(&poly, &sequential()).unwrap();
        assert_eq!(result.face_count(), 0);
        assert_eq!(result.vertex_count(), 1); // the lone centroid
    }
}
