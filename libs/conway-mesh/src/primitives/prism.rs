//! # Prism and Antiprism Seeds
//!
//! Parametric n-gonal prisms and antiprisms with unit circumradius caps,
//! proportioned so every edge has the cap's edge length.

use std::f64::consts::{PI, TAU};

use glam::DVec3;

use crate::error::BuildError;
use crate::polyhedron::Polyhedron;

fn check_sides(symbol: char, sides: u32) -> Result<(), BuildError> {
    if sides < 3 {
        return Err(BuildError::base_generation(format!(
            "'{symbol}' needs at least 3 sides, got {sides}"
        )));
    }
    Ok(())
}

/// Creates the n-gonal prism seed (`P<n>`).
pub fn create_prism(sides: u32) -> Result<Polyhedron, BuildError> {
    check_sides('P', sides)?;
    let n = sides as usize;
    // Half-height matching the cap edge length 2 sin(pi/n).
    let half_height = (PI / sides as f64).sin();

    let mut poly = Polyhedron::new(format!("P{sides}"));
    for ring in [half_height, -half_height] {
        for i in 0..n {
            let angle = TAU * i as f64 / n as f64;
            poly.add_vertex(DVec3::new(angle.cos(), angle.sin(), ring));
        }
    }

    let top: Vec<u32> = (0..n as u32).collect();
    let bottom: Vec<u32> = (0..n as u32).rev().map(|i| i + n as u32).collect();
    poly.add_face(top);
    poly.add_face(bottom);
    for i in 0..n as u32 {
        let j = (i + 1) % n as u32;
        poly.add_face(vec![i, i + n as u32, j + n as u32, j]);
    }

    Ok(poly)
}

/// Creates the n-gonal antiprism seed (`A<n>`).
pub fn create_antiprism(sides: u32) -> Result<Polyhedron, BuildError> {
    check_sides('A', sides)?;
    let n = sides as usize;
    let twist = PI / sides as f64;
    // Half-height making the side edges as long as the cap edges.
    let half_height = (twist.sin().powi(2) - (twist / 2.0).sin().powi(2)).sqrt();

    let mut poly = Polyhedron::new(format!("A{sides}"));
    for i in 0..n {
        let angle = TAU * i as f64 / n as f64;
        poly.add_vertex(DVec3::new(angle.cos(), angle.sin(), half_height));
    }
    for i in 0..n {
        let angle = TAU * i as f64 / n as f64 + twist;
        poly.add_vertex(DVec3::new(angle.cos(), angle.sin(), -half_height));
    }

    let top: Vec<u32> = (0..n as u32).collect();
    let bottom: Vec<u32> = (0..n as u32).rev().map(|i| i + n as u32).collect();
    poly.add_face(top);
    poly.add_face(bottom);
    for i in 0..n as u32 {
        let j = (i + 1) % n as u32;
        poly.add_face(vec![i, i + n as u32, j]);
        poly.add_face(vec![i + n as u32, j + n as u32, j]);
    }

    Ok(poly)
}
