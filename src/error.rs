use crate::tokenizer::TokenKind;
use std::fmt;
use thiserror::Error;

/// An error raised while parsing tokens into a tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A token with no prefix parselet was found where an expression must start
    #[error("could not parse {kind:?} token {text:?}")]
    Unexpected {
        /// The kind of the offending token
        kind: TokenKind,
        /// The literal text of the offending token
        text: String,
    },
    /// A required closing or separating token was missing
    #[error("expected {expected:?} token, got {kind:?} token {text:?}")]
    Expected {
        /// The kind that was required
        expected: TokenKind,
        /// The kind of the token found instead
        kind: TokenKind,
        /// The literal text of the token found instead
        text: String,
    },
    /// Expressions were nested past the parser's depth limit
    #[error("expression nested deeper than {limit} levels")]
    TooDeep {
        /// The deepest nesting allowed
        limit: usize,
    },
}

/// Where an operator sits relative to its operands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Before its operand
    Prefix,
    /// Between its operands
    Infix,
    /// After its operand
    Postfix,
    /// Before its bounds and body
    Bounded,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Position::Prefix => "prefix",
            Position::Infix => "infix",
            Position::Postfix => "postfix",
            Position::Bounded => "bounded",
        })
    }
}

/// An error raised while rendering a tree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The operator has no rendering in this position
    #[error("no {position} symbol for {op:?}")]
    NoSymbol {
        /// The operator without a symbol
        op: TokenKind,
        /// The position the operator was used in
        position: Position,
    },
}

/// Any error raised while compiling
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The input was malformed
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The tree had a shape without a rendering
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// A result whose error is a compile [`Error`]
pub type Result<T> = std::result::Result<T, Error>;
