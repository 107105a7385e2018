//! # Seed Generators
//!
//! Mesh generation for the recipe seed solids: the five platonic tables plus
//! the parametric prism, antiprism and pyramid families.

pub mod platonic;
pub mod prism;
pub mod pyramid;

pub use platonic::{
    create_cube, create_dodecahedron, create_icosahedron, create_octahedron, create_tetrahedron,
};
pub use prism::{create_antiprism, create_prism};
pub use pyramid::create_pyramid;

use conway_recipe::{Seed, SeedKind};

use crate::error::BuildError;
use crate::polyhedron::Polyhedron;

/// Generates the seed solid for a parsed seed token.
pub fn generate(seed: &Seed) -> Result<Polyhedron, BuildError> {
    let sides = |seed: &Seed| {
        seed.sides.ok_or_else(|| {
            BuildError::base_generation(format!(
                "seed '{}' is missing its side count",
                seed.kind.symbol()
            ))
        })
    };

    match seed.kind {
        SeedKind::Tetrahedron => Ok(create_tetrahedron()),
        SeedKind::Cube => Ok(create_cube()),
        SeedKind::Octahedron => Ok(create_octahedron()),
        SeedKind::Icosahedron => Ok(create_icosahedron()),
        SeedKind::Dodecahedron => Ok(create_dodecahedron()),
        SeedKind::Prism => create_prism(sides(seed)?),
        SeedKind::Antiprism => create_antiprism(sides(seed)?),
        SeedKind::Pyramid => create_pyramid(sides(seed)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway_recipe::span::Span;

    #[test]
    fn test_generate_platonic() {
        let seed = Seed {
            kind: SeedKind::Cube,
            sides: None,
            span: Span::default(),
        };
        let poly = generate(&seed).unwrap();
        assert_eq!(poly.name(), "C");
        assert_eq!(poly.vertex_count(), 8);
    }

    #[test]
    fn test_generate_rejects_missing_sides() {
        let seed = Seed {
            kind: SeedKind::Prism,
            sides: None,
            span: Span::default(),
        };
        assert!(matches!(
            generate(&seed),
            Err(BuildError::BaseGeneration { .. })
        ));
    }

    #[test]
    fn test_all_seeds_satisfy_euler_formula() {
        let solids = [
            create_tetrahedron(),
            create_cube(),
            create_octahedron(),
            create_icosahedron(),
            create_dodecahedron(),
            create_prism(7).unwrap(),
            create_antiprism(5).unwrap(),
            create_pyramid(6).unwrap(),
        ];
        for poly in solids {
            let v = poly.vertex_count() as i64;
            let e = poly.edges().len() as i64;
            let f = poly.face_count() as i64;
            assert_eq!(v - e + f, 2, "Euler formula failed for '{}'", poly.name());
            assert!(poly.validate(), "invalid seed '{}'", poly.name());
        }
    }
}
