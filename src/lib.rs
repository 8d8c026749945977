//! A compiler from NoTeX, a typeable shorthand for math, to LaTeX
//!
//! NoTeX lets you write math with only the characters on your keyboard. Names are free-form text,
//! operators are ascii symbols, and sums, products, and integrals are introduced by keywords.
//!
//! ## Usage
//!
//! ```
//! let latex = notex::compile(r"int 0 to \pi of sin x / 2").unwrap();
//! assert_eq!(latex, r"\int_{0}^{\pi} \frac{sin x}{2}");
//! ```
//!
//! ## Dialect
//!
//! | NoTeX              | LaTeX                       |
//! |--------------------|-----------------------------|
//! | `a + b`, `a - b`   | `a + b`, `a - b`            |
//! | `a * b`, `a ** b`  | `a \cdot b`                 |
//! | `a / b`            | `\frac{a}{b}`               |
//! | `a ^ b`, `a _ b`   | `a^{b}`, `a_{b}`            |
//! | `=`, `>=`, `<=`, `!=`, `~=` | `=`, `\geq`, `\leq`, `\neq`, `\approx` |
//! | `\pi`              | `\pi`                       |
//! | `x@`, `x#`         | `\hat{x}`, `\vec{x}`        |
//! | `sum i = 0 to n of i` | `\sum_{i = 0}^{n} i`     |
//! | `int of x`         | `\int x`                    |
//!
//! Names run until an operator that breaks them, like whitespace or a symbol. Keywords (`int`,
//! `sum`, `production`, `prod`, `to`, `of`) are recognized ignoring ascii case, but only where a
//! token would start, so `hisum` is a single name while `a sum` is not. Whitespace between names
//! is kept, so `sin x` is one name, and any other whitespace is dropped.
//!
//! Parentheses group without being rendered. The body of a sum, product, or integral extends to
//! the end of the enclosing group, so `sum of x + y` sums `x + y`.
//!
//! ## Design
//!
//! Compiling has three stages that each hand a finished value to the next:
//!
//! 1. A [`Tokenizer`] scans an ordered [`OperatorTable`]. The first operator matching wins, so
//!    `**` must be listed before `*`.
//! 2. A [`Parser`] climbs precedence using the [`parselets`] registered for each [`TokenKind`],
//!    producing a tree of [`Node`][tree::Node]s.
//! 3. [`render`] walks the tree and emits LaTeX for each node shape.
//!
//! Input may hold several expressions back to back, e.g. `a (b)`, which are compiled in order and
//! concatenated. The first malformed expression aborts the whole compile.
//!
//! ### Custom operators
//!
//! The surface forms of operators can be changed by building a custom [`OperatorTable`]:
//! ```
//! use notex::{compile_with, Operator, OperatorTable, TokenKind};
//!
//! let table = OperatorTable::from_vec([
//!     Operator::symbol(TokenKind::Whitespace, " ").unwrap(),
//!     Operator::keyword(TokenKind::Divide, "over").unwrap(),
//! ]);
//! assert_eq!(compile_with("a over b", &table).unwrap(), r"\frac{a}{b}");
//! ```
#![warn(missing_docs)]
mod error;
mod operators;
mod parse;
pub mod parselets;
mod render;
mod tokenizer;
pub mod tree;

pub use error::{Error, ParseError, Position, RenderError, Result};
pub use operators::{Operator, OperatorTable, NOTEX_OPERATORS};
pub use parse::{parse, parse_tokens, Parser, MAX_DEPTH};
pub use render::render;
pub use tokenizer::{tokenize, RawTokenizer, Token, TokenKind, Tokenizer};

use log::debug;

/// Compile NoTeX into LaTeX using the default operators
///
/// Returns the empty string for empty input.
pub fn compile(inp: &str) -> Result<String> {
    compile_with(inp, OperatorTable::notex())
}

/// Compile NoTeX into LaTeX using a custom operator table
pub fn compile_with(inp: &str, operators: &OperatorTable) -> Result<String> {
    let mut parser = Parser::new(Tokenizer::with_operators(inp, operators));
    let mut output = String::new();
    while !parser.is_exhausted() {
        let expr = parser.parse_expression(0)?;
        let latex = render(&expr)?;
        debug!("compiled expression to {latex:?}");
        output.push_str(&latex);
    }
    Ok(output)
}
