//! # Conway Recipe
//!
//! Lexer and parser for the textual Conway polyhedron notation.
//!
//! A recipe is a string of operator letters followed by a single seed letter,
//! applied right-to-left: `"dakC"` is dual(ambo(kis(cube))). Parametric seeds
//! and operators carry an integer suffix, as in `"k4P5"`.
//!
//! ## Usage
//!
//! ```rust
//! use conway_recipe::parse;
//! use conway_recipe::ast::SeedKind;
//!
//! let recipe = parse("daP6").unwrap();
//! assert_eq!(recipe.seed.kind, SeedKind::Prism);
//! assert_eq!(recipe.ops.len(), 2);
//! ```

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod span;
pub mod token;

pub use ast::{OpKind, OpToken, Recipe, Seed, SeedKind};
pub use error::{ParseError, ParseErrorKind};
pub use parser::parse;
