//! # Polyhedron Data Structure
//!
//! Core polyhedron representation: an ordered vertex list plus ordered
//! polygonal face loops. Unlike a triangle mesh, faces keep their full loop
//! so topological operators can reason about corners and adjacency.

use config::constants::EPSILON_TOLERANCE;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A polyhedral mesh with named provenance.
///
/// All geometry uses f64 internally. Export to f32 only happens at the
/// GPU-buffer boundary.
///
/// # Example
///
/// ```rust
/// use conway_mesh::Polyhedron;
/// use glam::DVec3;
///
/// let mut poly = Polyhedron::new("C");
/// poly.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// poly.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// poly.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// poly.add_face(vec![0, 1, 2]);
/// assert_eq!(poly.vertex_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyhedron {
    /// Recipe-shaped provenance tag, e.g. `"daC"`.
    name: String,
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Face loops, each an ordered list of vertex indices
    faces: Vec<Vec<u32>>,
}

impl Polyhedron {
    /// Creates an empty polyhedron with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            vertices: Vec::new(),
            faces: Vec::new(),
        }
    }

    /// Creates a polyhedron from parts.
    pub fn from_parts(name: impl Into<String>, vertices: Vec<DVec3>, faces: Vec<Vec<u32>>) -> Self {
        Self {
            name: name.into(),
            vertices,
            faces,
        }
    }

    /// Returns the provenance name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the provenance name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the polyhedron has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a face loop.
    pub fn add_face(&mut self, loop_indices: Vec<u32>) {
        self.faces.push(loop_indices);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a mutable reference to the vertices.
    ///
    /// Used by the canonicalizer, which moves coordinates while leaving the
    /// topology untouched.
    #[inline]
    pub fn vertices_mut(&mut self) -> &mut Vec<DVec3> {
        &mut self.vertices
    }

    /// Returns a reference to the face loops.
    #[inline]
    pub fn faces(&self) -> &[Vec<u32>] {
        &self.faces
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the face loop at the given index.
    #[inline]
    pub fn face(&self, index: usize) -> &[u32] {
        &self.faces[index]
    }

    /// Computes the centroid of a face loop.
    pub fn face_centroid(&self, face: usize) -> DVec3 {
        let loop_indices = &self.faces[face];
        if loop_indices.is_empty() {
            return DVec3::ZERO;
        }
        let mut total = DVec3::ZERO;
        for &v in loop_indices {
            total += self.vertices[v as usize];
        }
        total / loop_indices.len() as f64
    }

    /// Computes the (unnormalized) outward normal of a face loop using
    /// Newell's method, which tolerates slightly non-planar loops.
    pub fn face_normal(&self, face: usize) -> DVec3 {
        let loop_indices = &self.faces[face];
        let mut normal = DVec3::ZERO;
        for (i, &v) in loop_indices.iter().enumerate() {
            let a = self.vertices[v as usize];
            let b = self.vertices[loop_indices[(i + 1) % loop_indices.len()] as usize];
            normal.x += (a.y - b.y) * (a.z + b.z);
            normal.y += (a.z - b.z) * (a.x + b.x);
            normal.z += (a.x - b.x) * (a.y + b.y);
        }
        normal
    }

    /// Returns all undirected edges, deduplicated, as `(min, max)` pairs.
    pub fn edges(&self) -> Vec<(u32, u32)> {
        let mut edges = Vec::new();
        for face in &self.faces {
            for (i, &v) in face.iter().enumerate() {
                let w = face[(i + 1) % face.len()];
                let edge = (v.min(w), v.max(w));
                edges.push(edge);
            }
        }
        edges.sort_unstable();
        edges.dedup();
        edges
    }

    /// Computes the centroid of all vertices.
    pub fn centroid(&self) -> DVec3 {
        if self.vertices.is_empty() {
            return DVec3::ZERO;
        }
        self.vertices.iter().sum::<DVec3>() / self.vertices.len() as f64
    }

    /// Validates the polyhedron for structural correctness.
    ///
    /// Checks:
    /// - All face indices are in range
    /// - Every face has at least 3 distinct vertices
    /// - All coordinates are finite
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        if !self.vertices.iter().all(|v| v.is_finite()) {
            return false;
        }

        let vertex_count = self.vertices.len() as u32;
        for face in &self.faces {
            if face.len() < 3 {
                return false;
            }
            if face.iter().any(|&v| v >= vertex_count) {
                return false;
            }
            for (i, &v) in face.iter().enumerate() {
                if face[i + 1..].contains(&v) {
                    return false;
                }
            }
        }

        true
    }

    /// True when two polyhedra share vertex/face counts and face degrees,
    /// ignoring coordinates. Used to check topology-preserving passes.
    pub fn same_topology(&self, other: &Polyhedron) -> bool {
        self.vertices.len() == other.vertices.len() && self.faces == other.faces
    }

    /// Decomposes the polyhedron into its parts.
    pub fn into_parts(self) -> (String, Vec<DVec3>, Vec<Vec<u32>>) {
        (self.name, self.vertices, self.faces)
    }
}

/// Mesh buffers suitable for GPU rendering.
///
/// Face loops are fan-triangulated; `f64` narrows to `f32` here and nowhere
/// else.
///
/// # Example
///
/// ```rust
/// use conway_mesh::primitives::create_cube;
///
/// let buffers = create_cube().to_mesh_buffers();
/// assert_eq!(buffers.vertex_count(), 8);
/// assert_eq!(buffers.triangle_count(), 12); // 6 quads, 2 triangles each
/// ```
#[derive(Debug, Clone, Default)]
pub struct MeshBuffers {
    /// Vertex positions as flat array [x, y, z, x, y, z, ...].
    pub vertices: Vec<f32>,
    /// Triangle indices as flat array [i0, i1, i2, i0, i1, i2, ...].
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl Polyhedron {
    /// Exports the polyhedron to GPU-friendly mesh buffers.
    ///
    /// Faces with more than three corners are fan-triangulated from their
    /// first corner, which assumes convex faces as every operator here
    /// produces.
    pub fn to_mesh_buffers(&self) -> MeshBuffers {
        let mut buffers = MeshBuffers::default();

        for v in &self.vertices {
            buffers.vertices.push(v.x as f32);
            buffers.vertices.push(v.y as f32);
            buffers.vertices.push(v.z as f32);
        }

        for face in &self.faces {
            if face.len() < 3 {
                continue;
            }
            let v0 = face[0];
            for i in 1..face.len() - 1 {
                buffers.indices.push(v0);
                buffers.indices.push(face[i]);
                buffers.indices.push(face[i + 1]);
            }
        }

        buffers
    }

    /// Drops faces that have collapsed below three distinct vertices or that
    /// span near-zero area. Best-effort cleanup after operators on irregular
    /// input.
    pub fn drop_degenerate_faces(&mut self) {
        let vertices = &self.vertices;
        self.faces.retain(|face| {
            if face.len() < 3 {
                return false;
            }
            let a = vertices[face[0] as usize];
            let b = vertices[face[1] as usize];
            let c = vertices[face[2] as usize];
            (b - a).cross(c - a).length() > EPSILON_TOLERANCE
        });
    }
}
