//! Tests for the canonicalization passes.

use super::*;
use crate::primitives::{create_cube, create_dodecahedron};
use approx::assert_relative_eq;
use glam::DVec3;

fn sequential() -> ParallelConfig {
    ParallelConfig::sequential()
}

#[test]
fn test_zero_iterations_is_identity() {
    let cube = create_cube();
    let adjusted = adjust(&cube, 0, &sequential()).unwrap();
    assert!(adjusted.same_topology(&cube));
    assert_eq!(adjusted.vertices(), cube.vertices());

    let canonical = canonicalize(&cube, 0, &sequential()).unwrap();
    assert!(canonical.same_topology(&cube));
    assert_eq!(canonical.vertices(), cube.vertices());
}

#[test]
fn test_adjust_preserves_topology() {
    let solid = create_dodecahedron();
    let relaxed = adjust(&solid, 8, &sequential()).unwrap();
    assert!(relaxed.same_topology(&solid));
    assert!(relaxed.validate());
}

#[test]
fn test_adjust_fixes_the_unit_cube() {
    // The cube at (±1, ±1, ±1) is a fixed point: its face centroids sit on
    // the unit sphere and reciprocate to themselves, and the dual's face
    // centroids reciprocate back to the cube corners.
    let cube = create_cube();
    let relaxed = adjust(&cube, 5, &sequential()).unwrap();
    for (a, b) in relaxed.vertices().iter().zip(cube.vertices()) {
        assert_relative_eq!(a.x, b.x, epsilon = 1.0e-9);
        assert_relative_eq!(a.y, b.y, epsilon = 1.0e-9);
        assert_relative_eq!(a.z, b.z, epsilon = 1.0e-9);
    }
}

#[test]
fn test_canonicalize_preserves_topology_and_symmetry() {
    let cube = create_cube();
    let relaxed = canonicalize(&cube, 10, &sequential()).unwrap();
    assert!(relaxed.same_topology(&cube));
    assert!(relaxed.validate());
    // Symmetry survives: all corners stay equidistant from the origin.
    let radius = relaxed.vertex(0).length();
    for v in relaxed.vertices() {
        assert_relative_eq!(v.length(), radius, epsilon = 1.0e-9);
    }
}

#[test]
fn test_degenerate_input_is_a_canonicalization_error() {
    // A lone square face has no closed vertex rings, so its dual is not a
    // clean face/vertex exchange.
    let mut poly = Polyhedron::new("open");
    poly.add_vertex(DVec3::ZERO);
    poly.add_vertex(DVec3::X);
    poly.add_vertex(DVec3::new(1.0, 1.0, 0.0));
    poly.add_vertex(DVec3::Y);
    poly.add_face(vec![0, 1, 2, 3]);
    let err = adjust(&poly, 1, &sequential()).unwrap_err();
    assert!(matches!(err, BuildError::Canonicalization { .. }));
}

#[test]
fn test_mode_dispatch() {
    let cube = create_cube();
    let kept = CanonicalMode::None
        .apply(cube.clone(), &sequential())
        .unwrap();
    assert_eq!(kept.vertices(), cube.vertices());

    let relaxed = CanonicalMode::Adjust(2)
        .apply(cube.clone(), &sequential())
        .unwrap();
    assert!(relaxed.same_topology(&cube));
}

#[test]
fn test_tangent_point_is_perpendicular() {
    let a = DVec3::new(1.0, 1.0, 1.0);
    let b = DVec3::new(1.0, 1.0, -1.0);
    let t = tangent_point(a, b);
    assert_relative_eq!(t.x, 1.0);
    assert_relative_eq!(t.y, 1.0);
    assert_relative_eq!(t.z, 0.0);
}
