//! # Topological Operators
//!
//! Pure transformations from one [`Polyhedron`] to another. Every operator
//! emits named vertices and oriented face edges into a fresh
//! [`FlagSet`](crate::topo::FlagSet) and lets reconstruction stitch the
//! indexed mesh back together; the only exception is `reflect`, which is a
//! plain coordinate map.
//!
//! New-vertex names are canonical: two faces computing "the same" point (an
//! edge midpoint, say) produce the same name and therefore share the vertex
//! without synchronization.

pub mod ambo;
pub mod dual;
pub mod gyro;
pub mod kis;
pub mod reflect;

use config::constants::ParallelConfig;
use conway_recipe::{OpKind, OpToken};

use crate::error::BuildError;
use crate::polyhedron::Polyhedron;

/// The operator family, dispatched by exhaustive match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Face/vertex exchange.
    Dual,
    /// Edge midpoints become vertices; faces per original face and vertex.
    Ambo,
    /// Apex per face, optionally restricted to n-sided faces.
    Kis {
        /// Only faces with exactly this many sides grow an apex.
        sides: Option<u32>,
    },
    /// Pentagon per face corner.
    Gyro,
    /// Mirror image.
    Reflect,
}

impl Operator {
    /// Builds an operator from its recipe token.
    pub fn from_token(token: &OpToken) -> Self {
        match token.kind {
            OpKind::Dual => Operator::Dual,
            OpKind::Ambo => Operator::Ambo,
            OpKind::Kis => Operator::Kis {
                sides: token.param,
            },
            OpKind::Gyro => Operator::Gyro,
            OpKind::Reflect => Operator::Reflect,
        }
    }

    /// The notation letter for this operator.
    pub fn symbol(&self) -> char {
        match self {
            Operator::Dual => 'd',
            Operator::Ambo => 'a',
            Operator::Kis { .. } => 'k',
            Operator::Gyro => 'g',
            Operator::Reflect => 'r',
        }
    }

    /// Applies the operator, producing a new model.
    ///
    /// Fails with [`BuildError::OperatorApplication`] naming this operator's
    /// symbol; a failed application never yields a partial model.
    pub fn apply(
        &self,
        poly: &Polyhedron,
        parallel: &ParallelConfig,
    ) -> Result<Polyhedron, BuildError> {
        if !poly.validate() {
            return Err(BuildError::operator(
                self.symbol(),
                "input model failed validation",
            ));
        }

        let applied = match self {
            Operator::Dual => dual::dual(poly, parallel),
            Operator::Ambo => ambo::ambo(poly),
            Operator::Kis { sides } => kis::kis(poly, *sides),
            Operator::Gyro => gyro::gyro(poly),
            Operator::Reflect => reflect::reflect(poly),
        };

        applied.map_err(|err| match err {
            tagged @ BuildError::OperatorApplication { .. } => tagged,
            // Invariant violations are bugs, not operator failures; keep the
            // class intact.
            invariant @ BuildError::InternalInvariant { .. } => invariant,
            other => BuildError::operator(self.symbol(), other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conway_recipe::span::Span;
    use glam::DVec3;

    #[test]
    fn test_from_token_carries_kis_parameter() {
        let token = OpToken {
            kind: OpKind::Kis,
            param: Some(3),
            span: Span::default(),
        };
        assert_eq!(Operator::from_token(&token), Operator::Kis { sides: Some(3) });
    }

    #[test]
    fn test_apply_rejects_invalid_input() {
        let mut poly = Polyhedron::new("bad");
        poly.add_vertex(DVec3::ZERO);
        poly.add_face(vec![0, 1, 2]); // out-of-range indices
        let err = Operator::Ambo
            .apply(&poly, &ParallelConfig::sequential())
            .unwrap_err();
        assert!(matches!(
            err,
            BuildError::OperatorApplication { operator: 'a', .. }
        ));
    }
}
