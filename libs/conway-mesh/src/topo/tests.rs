//! Tests for flag accumulation and reconstruction.

use super::*;
use glam::DVec3;
use std::f64::consts::TAU;

/// Builds a closed triangular fan: one hub, `rim` vertices around it, one
/// triangle per rim edge.
fn fan_flags(rim: usize) -> FlagSet {
    let mut flags = FlagSet::new();
    flags.register_vertex("hub", DVec3::Z);
    for i in 0..rim {
        let angle = TAU * i as f64 / rim as f64;
        flags.register_vertex(&format!("rim{i}"), DVec3::new(angle.cos(), angle.sin(), 0.0));
    }
    for i in 0..rim {
        let a = format!("rim{i}");
        let b = format!("rim{}", (i + 1) % rim);
        let face = format!("f{i}");
        flags.register_edge(&face, "hub", &a);
        flags.register_edge(&face, &a, &b);
        flags.register_edge(&face, &b, "hub");
    }
    flags
}

#[test]
fn test_fan_reconstructs_expected_counts() {
    for rim in 3..8 {
        let poly = fan_flags(rim).reconstruct();
        assert_eq!(poly.vertex_count(), rim + 1);
        assert_eq!(poly.face_count(), rim);
        assert!(poly.validate());
    }
}

#[test]
fn test_vertex_order_is_first_registration_order() {
    let poly = fan_flags(4).reconstruct();
    // Hub registered first, so it gets index 0.
    assert_eq!(poly.vertex(0), DVec3::Z);
}

#[test]
fn test_register_vertex_is_idempotent() {
    let mut flags = FlagSet::new();
    flags.register_vertex("a", DVec3::X);
    flags.register_vertex("a", DVec3::splat(9.0));
    flags.register_vertex("b", DVec3::Y);
    flags.register_vertex("c", DVec3::Z);
    flags.register_edge("f", "a", "b");
    flags.register_edge("f", "b", "c");
    flags.register_edge("f", "c", "a");
    let poly = flags.reconstruct();
    assert_eq!(poly.vertex_count(), 3);
    assert_eq!(poly.vertex(0), DVec3::X); // first registration wins
}

#[test]
fn test_partial_face_is_dropped() {
    let mut flags = FlagSet::new();
    flags.register_vertex("a", DVec3::ZERO);
    flags.register_vertex("b", DVec3::X);
    flags.register_vertex("c", DVec3::Y);
    // Only 2 of the 3 edges needed to close the triangle.
    flags.register_edge("f", "a", "b");
    flags.register_edge("f", "b", "c");
    let poly = flags.reconstruct();
    assert_eq!(poly.vertex_count(), 3);
    assert_eq!(poly.face_count(), 0);
}

#[test]
fn test_face_touching_unpositioned_vertex_is_dropped() {
    let mut flags = FlagSet::new();
    flags.register_vertex("a", DVec3::ZERO);
    flags.register_vertex("b", DVec3::X);
    // "ghost" never gets a position.
    flags.register_edge("f", "a", "b");
    flags.register_edge("f", "b", "ghost");
    flags.register_edge("f", "ghost", "a");
    let poly = flags.reconstruct();
    assert_eq!(poly.face_count(), 0);
}

#[test]
fn test_extra_disconnected_edge_spoils_the_face() {
    let mut flags = fan_flags(3);
    flags.register_vertex("x", DVec3::splat(2.0));
    flags.register_vertex("y", DVec3::splat(3.0));
    // f0 now carries an edge its cycle can never consume.
    flags.register_edge("f0", "x", "y");
    let poly = flags.reconstruct();
    assert_eq!(poly.face_count(), 2);
}

#[test]
fn test_duplicate_from_entries_last_write_wins() {
    let mut flags = FlagSet::new();
    for (name, position) in [
        ("a", DVec3::ZERO),
        ("b", DVec3::X),
        ("c", DVec3::Y),
        ("d", DVec3::Z),
    ] {
        flags.register_vertex(name, position);
    }
    flags.register_edge("f", "a", "d"); // overwritten below
    flags.register_edge("f", "a", "b");
    flags.register_edge("f", "b", "c");
    flags.register_edge("f", "c", "a");
    let poly = flags.reconstruct();
    assert_eq!(poly.face_count(), 1);
    assert_eq!(poly.face(0).len(), 3);
}

#[test]
fn test_face_order_is_first_registration_order() {
    let (_, names) = fan_flags(3).reconstruct_named();
    assert_eq!(names, vec!["f0", "f1", "f2"]);
}

#[test]
fn test_reconstruction_is_deterministic() {
    let a = fan_flags(6).reconstruct();
    let b = fan_flags(6).reconstruct();
    assert_eq!(a, b);
}

#[test]
fn test_name_arena_interns_once() {
    let mut arena = NameArena::default();
    let a = arena.intern("x");
    let b = arena.intern("x");
    let c = arena.intern("y");
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_eq!(arena.name(c), "y");
    assert_eq!(arena.len(), 2);
}
