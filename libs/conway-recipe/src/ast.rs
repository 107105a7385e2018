//! # Recipe AST
//!
//! Typed representation of a parsed recipe: one seed plus an ordered list of
//! operators. The textual notation applies right-to-left, so the parser
//! reverses the operator tokens and `Recipe::ops` is already in application
//! order.

use crate::span::Span;

/// Seed solids addressable from a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedKind {
    /// `T` - tetrahedron.
    Tetrahedron,
    /// `C` - cube.
    Cube,
    /// `O` - octahedron.
    Octahedron,
    /// `I` - icosahedron.
    Icosahedron,
    /// `D` - dodecahedron.
    Dodecahedron,
    /// `P<n>` - n-gonal prism.
    Prism,
    /// `A<n>` - n-gonal antiprism.
    Antiprism,
    /// `Y<n>` - n-gonal pyramid.
    Pyramid,
}

impl SeedKind {
    /// The notation letter for this seed.
    pub fn symbol(&self) -> char {
        match self {
            SeedKind::Tetrahedron => 'T',
            SeedKind::Cube => 'C',
            SeedKind::Octahedron => 'O',
            SeedKind::Icosahedron => 'I',
            SeedKind::Dodecahedron => 'D',
            SeedKind::Prism => 'P',
            SeedKind::Antiprism => 'A',
            SeedKind::Pyramid => 'Y',
        }
    }

    /// True if this seed takes a mandatory side-count parameter.
    pub fn takes_sides(&self) -> bool {
        matches!(
            self,
            SeedKind::Prism | SeedKind::Antiprism | SeedKind::Pyramid
        )
    }
}

/// A seed token with its optional side count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed {
    /// Which solid to generate.
    pub kind: SeedKind,
    /// Side count for the parametric seeds (`P`, `A`, `Y`).
    pub sides: Option<u32>,
    /// Source location.
    pub span: Span,
}

/// Operators addressable from a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    /// `d` - dual.
    Dual,
    /// `a` - ambo.
    Ambo,
    /// `k` - kis, optionally restricted to n-sided faces.
    Kis,
    /// `g` - gyro.
    Gyro,
    /// `r` - reflect.
    Reflect,
}

impl OpKind {
    /// The notation letter for this operator.
    pub fn symbol(&self) -> char {
        match self {
            OpKind::Dual => 'd',
            OpKind::Ambo => 'a',
            OpKind::Kis => 'k',
            OpKind::Gyro => 'g',
            OpKind::Reflect => 'r',
        }
    }

    /// True if this operator accepts an optional integer parameter.
    pub fn takes_param(&self) -> bool {
        matches!(self, OpKind::Kis)
    }
}

/// An operator token with its optional parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpToken {
    /// Which operator to apply.
    pub kind: OpKind,
    /// Optional integer parameter (face-degree filter for `k`).
    pub param: Option<u32>,
    /// Source location.
    pub span: Span,
}

/// A complete parsed recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipe {
    /// The seed solid.
    pub seed: Seed,
    /// Operators in application order (innermost first).
    pub ops: Vec<OpToken>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_symbols_round_trip() {
        for kind in [
            SeedKind::Tetrahedron,
            SeedKind::Cube,
            SeedKind::Octahedron,
            SeedKind::Icosahedron,
            SeedKind::Dodecahedron,
            SeedKind::Prism,
            SeedKind::Antiprism,
            SeedKind::Pyramid,
        ] {
            assert!(kind.symbol().is_ascii_uppercase());
        }
    }

    #[test]
    fn test_parametric_seeds() {
        assert!(SeedKind::Prism.takes_sides());
        assert!(!SeedKind::Cube.takes_sides());
        assert!(OpKind::Kis.takes_param());
        assert!(!OpKind::Dual.takes_param());
    }
}
