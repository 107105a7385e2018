//! # Recipe Parser
//!
//! Turns a token stream into a [`Recipe`]. The notation reads right-to-left:
//! the final letter group is the seed, everything before it is an operator
//! chain whose rightmost member applies first.
//!
//! ## Example
//!
//! ```rust
//! use conway_recipe::parse;
//! use conway_recipe::ast::{OpKind, SeedKind};
//!
//! let recipe = parse("dakC").unwrap();
//! assert_eq!(recipe.seed.kind, SeedKind::Cube);
//! // Application order: kis first, dual last.
//! assert_eq!(recipe.ops[0].kind, OpKind::Kis);
//! assert_eq!(recipe.ops[2].kind, OpKind::Dual);
//! ```

use crate::ast::{OpKind, OpToken, Recipe, Seed, SeedKind};
use crate::error::ParseError;
use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{Token, TokenKind};

/// Parse a recipe string into its AST.
pub fn parse(source: &str) -> Result<Recipe, ParseError> {
    let tokens = Lexer::new(source).tokenize()?;
    Parser::new(tokens).parse()
}

/// A letter with its attached parameter, the unit the grammar works in.
struct Group {
    symbol: char,
    symbol_span: Span,
    param: Option<u32>,
    span: Span,
}

/// Recipe parser over a lexed token stream.
pub struct Parser {
    tokens: Vec<Token>,
}

impl Parser {
    /// Create a parser for a token stream.
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    /// Parse the token stream into a recipe.
    pub fn parse(self) -> Result<Recipe, ParseError> {
        let eof_span = self
            .tokens
            .last()
            .map(|t| t.span)
            .unwrap_or_default();

        let mut groups = self.into_groups()?;

        let Some(seed_group) = groups.pop() else {
            return Err(ParseError::missing_seed(eof_span));
        };
        let seed = Self::parse_seed(seed_group)?;

        // Rightmost operator applies first.
        let mut ops = Vec::with_capacity(groups.len());
        for group in groups.into_iter().rev() {
            ops.push(Self::parse_op(group)?);
        }

        Ok(Recipe { seed, ops })
    }

    /// Pair each letter with the number that follows it, if any.
    fn into_groups(self) -> Result<Vec<Group>, ParseError> {
        let mut groups: Vec<Group> = Vec::new();
        let mut tokens = self.tokens.into_iter().peekable();

        while let Some(token) = tokens.next() {
            match token.kind {
                TokenKind::Eof => break,
                TokenKind::Number => {
                    return Err(ParseError::stray_number(&token.text, token.span));
                }
                TokenKind::Letter => {
                    let symbol = token.text.chars().next().unwrap_or_default();
                    let mut group = Group {
                        symbol,
                        symbol_span: token.span,
                        param: None,
                        span: token.span,
                    };
                    if let Some(number) = tokens.next_if(|t| t.kind == TokenKind::Number) {
                        let value: u32 = number.text.parse().map_err(|_| {
                            ParseError::invalid_parameter(&number.text, number.span)
                        })?;
                        group.param = Some(value);
                        group.span = group.span.merge(number.span);
                    }
                    groups.push(group);
                }
            }
        }

        Ok(groups)
    }

    /// Interpret a group in seed position.
    fn parse_seed(group: Group) -> Result<Seed, ParseError> {
        let kind = match group.symbol {
            'T' => SeedKind::Tetrahedron,
            'C' => SeedKind::Cube,
            'O' => SeedKind::Octahedron,
            'I' => SeedKind::Icosahedron,
            'D' => SeedKind::Dodecahedron,
            'P' => SeedKind::Prism,
            'A' => SeedKind::Antiprism,
            'Y' => SeedKind::Pyramid,
            other => return Err(ParseError::unknown_seed(other, group.symbol_span)),
        };

        if kind.takes_sides() && group.param.is_none() {
            return Err(ParseError::parameter_required(group.symbol, group.span));
        }
        if !kind.takes_sides() && group.param.is_some() {
            return Err(ParseError::parameter_not_allowed(group.symbol, group.span));
        }

        Ok(Seed {
            kind,
            sides: group.param,
            span: group.span,
        })
    }

    /// Interpret a group in operator position.
    fn parse_op(group: Group) -> Result<OpToken, ParseError> {
        let kind = match group.symbol {
            'd' => OpKind::Dual,
            'a' => OpKind::Ambo,
            'k' => OpKind::Kis,
            'g' => OpKind::Gyro,
            'r' => OpKind::Reflect,
            other => return Err(ParseError::unknown_operator(other, group.symbol_span)),
        };

        if !kind.takes_param() && group.param.is_some() {
            return Err(ParseError::parameter_not_allowed(group.symbol, group.span));
        }

        Ok(OpToken {
            kind,
            param: group.param,
            span: group.span,
        })
    }
}
