//! # Flag Accumulation and Reconstruction
//!
//! Operators describe their output sparsely: named vertices plus named,
//! oriented face edges ("flags"). [`FlagSet`] collects that description and
//! reconstructs an indexed [`Polyhedron`] from it - dense vertex indices in
//! first-registration order, face loops recovered by walking each face's
//! directed edges until the walk closes.
//!
//! Names are interned to dense integers on first sight; after interning all
//! bookkeeping is index-addressed.

use std::collections::HashMap;

use glam::DVec3;

use crate::polyhedron::Polyhedron;

/// Interns strings to dense `u32` ids in first-seen order.
#[derive(Debug, Default)]
pub struct NameArena {
    lookup: HashMap<String, u32>,
    names: Vec<String>,
}

impl NameArena {
    /// Returns the id for `name`, allocating one on first sight.
    pub fn intern(&mut self, name: &str) -> u32 {
        if let Some(&id) = self.lookup.get(name) {
            return id;
        }
        let id = self.names.len() as u32;
        self.names.push(name.to_string());
        self.lookup.insert(name.to_string(), id);
        id
    }

    /// Returns the id for `name` if it has been interned.
    pub fn get(&self, name: &str) -> Option<u32> {
        self.lookup.get(name).copied()
    }

    /// Returns the name for an id.
    pub fn name(&self, id: u32) -> &str {
        &self.names[id as usize]
    }

    /// Number of interned names.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if nothing has been interned.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Accumulates named vertices and oriented face edges, then reconstructs an
/// indexed polyhedron.
///
/// # Example
///
/// ```rust
/// use conway_mesh::topo::FlagSet;
/// use glam::DVec3;
///
/// let mut flags = FlagSet::new();
/// flags.register_vertex("a", DVec3::ZERO);
/// flags.register_vertex("b", DVec3::X);
/// flags.register_vertex("c", DVec3::Y);
/// flags.register_edge("f", "a", "b");
/// flags.register_edge("f", "b", "c");
/// flags.register_edge("f", "c", "a");
/// let poly = flags.reconstruct();
/// assert_eq!(poly.vertex_count(), 3);
/// assert_eq!(poly.face_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct FlagSet {
    /// Every vertex name ever mentioned, positioned or not.
    vertices: NameArena,
    /// Position per vertex id; `None` until `register_vertex` supplies one.
    positions: Vec<Option<DVec3>>,
    /// Vertex ids in first-position-registration order.
    registration: Vec<u32>,
    /// Every face name ever mentioned.
    faces: NameArena,
    /// Ordered directed edges per face id.
    face_edges: Vec<Vec<(u32, u32)>>,
}

impl FlagSet {
    /// Creates an empty flag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a vertex position under a name.
    ///
    /// Write-once: a second registration under the same name is ignored,
    /// whatever its position.
    pub fn register_vertex(&mut self, name: &str, position: DVec3) {
        let id = self.vertices.intern(name);
        self.ensure_vertex_slot(id);
        if self.positions[id as usize].is_none() {
            self.positions[id as usize] = Some(position);
            self.registration.push(id);
        }
    }

    /// Appends a directed edge `from -> to` to the ordered edge list of the
    /// named face.
    pub fn register_edge(&mut self, face: &str, from: &str, to: &str) {
        let face_id = self.faces.intern(face);
        if self.face_edges.len() <= face_id as usize {
            self.face_edges.resize_with(face_id as usize + 1, Vec::new);
        }
        let from_id = self.vertices.intern(from);
        self.ensure_vertex_slot(from_id);
        let to_id = self.vertices.intern(to);
        self.ensure_vertex_slot(to_id);
        self.face_edges[face_id as usize].push((from_id, to_id));
    }

    fn ensure_vertex_slot(&mut self, id: u32) {
        if self.positions.len() <= id as usize {
            self.positions.resize(id as usize + 1, None);
        }
    }

    /// Reconstructs the indexed polyhedron. See [`Self::reconstruct_named`].
    pub fn reconstruct(self) -> Polyhedron {
        self.reconstruct_named().0
    }

    /// Reconstructs the indexed polyhedron, also returning the registered
    /// name of each surviving face, parallel to the face array.
    ///
    /// Vertices are emitted in first-registration order; faces in
    /// first-registration order of their names. A face is emitted only if
    /// walking its directed edges from the first registered edge closes into
    /// a cycle that consumes every adjacency entry; partial or dangling faces
    /// are dropped, as are faces that touch a name with no registered
    /// position. Duplicate `(face, from)` registrations collapse to the last
    /// one before the walk.
    pub fn reconstruct_named(self) -> (Polyhedron, Vec<String>) {
        // Dense output index per vertex id, in registration order.
        let mut dense: Vec<Option<u32>> = vec![None; self.positions.len()];
        let mut vertices = Vec::with_capacity(self.registration.len());
        for (out_index, &id) in self.registration.iter().enumerate() {
            dense[id as usize] = Some(out_index as u32);
            if let Some(position) = self.positions[id as usize] {
                vertices.push(position);
            }
        }

        let mut faces = Vec::new();
        let mut names = Vec::new();
        for (face_id, edges) in self.face_edges.iter().enumerate() {
            if let Some(loop_indices) = walk_face(edges, &dense) {
                faces.push(loop_indices);
                names.push(self.faces.name(face_id as u32).to_string());
            }
        }

        (Polyhedron::from_parts("", vertices, faces), names)
    }
}

/// Walks a face's directed edges into a closed loop of dense vertex indices.
///
/// Returns `None` when the walk cannot close, does not consume every
/// adjacency entry, or touches an unpositioned vertex.
fn walk_face(edges: &[(u32, u32)], dense: &[Option<u32>]) -> Option<Vec<u32>> {
    if edges.is_empty() {
        return None;
    }

    // Last write wins for duplicate `from` entries.
    let mut adjacency: HashMap<u32, u32> = HashMap::with_capacity(edges.len());
    for &(from, to) in edges {
        adjacency.insert(from, to);
    }

    let start = edges[0].0;
    let mut loop_indices = Vec::with_capacity(adjacency.len());
    let mut current = start;
    loop {
        loop_indices.push(dense[current as usize]?);
        current = *adjacency.get(&current)?;
        if current == start {
            break;
        }
        if loop_indices.len() >= adjacency.len() {
            // The walk revisited a vertex without returning to the start.
            return None;
        }
    }

    if loop_indices.len() != adjacency.len() || loop_indices.len() < 3 {
        return None;
    }

    Some(loop_indices)
}

#[cfg(test)]
mod tests;
