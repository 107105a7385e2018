//! # Platonic Seed Tables
//!
//! The five platonic solids as fixed vertex/face tables, each wound
//! counter-clockwise viewed from outside.

use glam::DVec3;

use crate::polyhedron::Polyhedron;

/// Creates the tetrahedron seed (`T`).
pub fn create_tetrahedron() -> Polyhedron {
    let vertices = vec![
        DVec3::new(1.0, 1.0, 1.0),
        DVec3::new(1.0, -1.0, -1.0),
        DVec3::new(-1.0, 1.0, -1.0),
        DVec3::new(-1.0, -1.0, 1.0),
    ];
    let faces = vec![
        vec![0, 1, 2],
        vec![0, 2, 3],
        vec![0, 3, 1],
        vec![1, 3, 2],
    ];
    Polyhedron::from_parts("T", vertices, faces)
}

/// Creates the cube seed (`C`).
pub fn create_cube() -> Polyhedron {
    let vertices = vec![
        DVec3::new(-1.0, -1.0, -1.0),
        DVec3::new(1.0, -1.0, -1.0),
        DVec3::new(1.0, 1.0, -1.0),
        DVec3::new(-1.0, 1.0, -1.0),
        DVec3::new(-1.0, -1.0, 1.0),
        DVec3::new(1.0, -1.0, 1.0),
        DVec3::new(1.0, 1.0, 1.0),
        DVec3::new(-1.0, 1.0, 1.0),
    ];
    let faces = vec![
        vec![0, 3, 2, 1],
        vec![4, 5, 6, 7],
        vec![0, 1, 5, 4],
        vec![1, 2, 6, 5],
        vec![2, 3, 7, 6],
        vec![3, 0, 4, 7],
    ];
    Polyhedron::from_parts("C", vertices, faces)
}

/// Creates the octahedron seed (`O`).
pub fn create_octahedron() -> Polyhedron {
    let vertices = vec![
        DVec3::new(1.0, 0.0, 0.0),
        DVec3::new(-1.0, 0.0, 0.0),
        DVec3::new(0.0, 1.0, 0.0),
        DVec3::new(0.0, -1.0, 0.0),
        DVec3::new(0.0, 0.0, 1.0),
        DVec3::new(0.0, 0.0, -1.0),
    ];
    let faces = vec![
        vec![0, 2, 4],
        vec![2, 1, 4],
        vec![1, 3, 4],
        vec![3, 0, 4],
        vec![2, 0, 5],
        vec![1, 2, 5],
        vec![3, 1, 5],
        vec![0, 3, 5],
    ];
    Polyhedron::from_parts("O", vertices, faces)
}

/// Creates the icosahedron seed (`I`).
pub fn create_icosahedron() -> Polyhedron {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let vertices = vec![
        DVec3::new(-1.0, phi, 0.0),
        DVec3::new(1.0, phi, 0.0),
        DVec3::new(-1.0, -phi, 0.0),
        DVec3::new(1.0, -phi, 0.0),
        DVec3::new(0.0, -1.0, phi),
        DVec3::new(0.0, 1.0, phi),
        DVec3::new(0.0, -1.0, -phi),
        DVec3::new(0.0, 1.0, -phi),
        DVec3::new(phi, 0.0, -1.0),
        DVec3::new(phi, 0.0, 1.0),
        DVec3::new(-phi, 0.0, -1.0),
        DVec3::new(-phi, 0.0, 1.0),
    ];
    let faces = vec![
        vec![0, 11, 5],
        vec![0, 5, 1],
        vec![0, 1, 7],
        vec![0, 7, 10],
        vec![0, 10, 11],
        vec![1, 5, 9],
        vec![5, 11, 4],
        vec![11, 10, 2],
        vec![10, 7, 6],
        vec![7, 1, 8],
        vec![3, 9, 4],
        vec![3, 4, 2],
        vec![3, 2, 6],
        vec![3, 6, 8],
        vec![3, 8, 9],
        vec![4, 9, 5],
        vec![2, 4, 11],
        vec![6, 2, 10],
        vec![8, 6, 7],
        vec![9, 8, 1],
    ];
    Polyhedron::from_parts("I", vertices, faces)
}

/// Creates the dodecahedron seed (`D`).
pub fn create_dodecahedron() -> Polyhedron {
    let phi = (1.0 + 5.0_f64.sqrt()) / 2.0;
    let inv = 1.0 / phi;
    let vertices = vec![
        DVec3::new(1.0, 1.0, 1.0),
        DVec3::new(1.0, 1.0, -1.0),
        DVec3::new(1.0, -1.0, 1.0),
        DVec3::new(1.0, -1.0, -1.0),
        DVec3::new(-1.0, 1.0, 1.0),
        DVec3::new(-1.0, 1.0, -1.0),
        DVec3::new(-1.0, -1.0, 1.0),
        DVec3::new(-1.0, -1.0, -1.0),
        DVec3::new(0.0, inv, phi),
        DVec3::new(0.0, inv, -phi),
        DVec3::new(0.0, -inv, phi),
        DVec3::new(0.0, -inv, -phi),
        DVec3::new(inv, phi, 0.0),
        DVec3::new(inv, -phi, 0.0),
        DVec3::new(-inv, phi, 0.0),
        DVec3::new(-inv, -phi, 0.0),
        DVec3::new(phi, 0.0, inv),
        DVec3::new(phi, 0.0, -inv),
        DVec3::new(-phi, 0.0, inv),
        DVec3::new(-phi, 0.0, -inv),
    ];
    let faces = vec![
        vec![0, 8, 10, 2, 16],
        vec![0, 16, 17, 1, 12],
        vec![0, 12, 14, 4, 8],
        vec![1, 17, 3, 11, 9],
        vec![1, 9, 5, 14, 12],
        vec![2, 10, 6, 15, 13],
        vec![2, 13, 3, 17, 16],
        vec![3, 13, 15, 7, 11],
        vec![4, 14, 5, 19, 18],
        vec![4, 18, 6, 10, 8],
        vec![5, 9, 11, 7, 19],
        vec![6, 18, 19, 7, 15],
    ];
    Polyhedron::from_parts("D", vertices, faces)
}
