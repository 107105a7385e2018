//! # Build Errors
//!
//! Error types for the recipe-to-mesh pipeline and the accelerated compute
//! layer.

use thiserror::Error;

/// Errors that can occur while building a polyhedron from a recipe.
#[derive(Debug, Error)]
pub enum BuildError {
    /// Parse error from the recipe layer
    #[error("Recipe error: {0}")]
    Recipe(#[from] conway_recipe::ParseError),

    /// A seed generator rejected its parameters
    #[error("Base generation failed: {message}")]
    BaseGeneration { message: String },

    /// An operator could not be applied
    #[error("Operator '{operator}' failed: {message}")]
    OperatorApplication { operator: char, message: String },

    /// The canonicalization pass failed
    #[error("Canonicalization failed: {message}")]
    Canonicalization { message: String },

    /// An internal invariant was violated - a bug, not bad user input
    #[error("Internal invariant violated: {message}")]
    InternalInvariant { message: String },
}

impl BuildError {
    /// Creates a base generation error.
    pub fn base_generation(message: impl Into<String>) -> Self {
        Self::BaseGeneration {
            message: message.into(),
        }
    }

    /// Creates an operator application error tagged with the operator symbol.
    pub fn operator(operator: char, message: impl Into<String>) -> Self {
        Self::OperatorApplication {
            operator,
            message: message.into(),
        }
    }

    /// Creates a canonicalization error.
    pub fn canonicalization(message: impl Into<String>) -> Self {
        Self::Canonicalization {
            message: message.into(),
        }
    }

    /// Creates an internal invariant error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::InternalInvariant {
            message: message.into(),
        }
    }
}

/// Errors raised by accelerated compute strategies.
///
/// Resource-class errors are absorbed by the fallback wrapper and never
/// surface past it; execution errors propagate unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccelError {
    /// No compute device is available in this environment
    #[error("accelerator device unavailable: {0}")]
    DeviceUnavailable(String),

    /// A device buffer or resource could not be allocated
    #[error("accelerator allocation failed: {0}")]
    AllocationFailed(String),

    /// The requested kernel is not compiled or not present
    #[error("kernel unavailable: {0}")]
    KernelUnavailable(String),

    /// The kernel ran but produced a failure
    #[error("kernel execution failed: {0}")]
    ExecutionFailed(String),
}

impl AccelError {
    /// True for environment/resource failures that the fallback wrapper
    /// recovers from by running the portable strategy.
    pub fn is_resource(&self) -> bool {
        !matches!(self, AccelError::ExecutionFailed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_error_names_symbol() {
        let err = BuildError::operator('d', "walk did not close");
        assert!(format!("{}", err).contains("'d'"));
    }

    #[test]
    fn test_accel_error_classification() {
        assert!(AccelError::DeviceUnavailable("no device".into()).is_resource());
        assert!(AccelError::AllocationFailed("oom".into()).is_resource());
        assert!(AccelError::KernelUnavailable("reciprocal".into()).is_resource());
        assert!(!AccelError::ExecutionFailed("nan".into()).is_resource());
    }
}
