//! The ordered catalog of operator surface forms
//!
//! Unlike a longest-prefix lookup, an [`OperatorTable`] is scanned front to back and the first
//! matching [`Operator`] wins. Overlapping forms like `**` and `*` are therefore resolved by the
//! order they're listed in, not by their length.
//!
//! # Example
//!
//! ```
//! use notex::{OperatorTable, TokenKind, NOTEX_OPERATORS};
//!
//! let table = OperatorTable::from_patterns(NOTEX_OPERATORS.iter().copied()).unwrap();
//! assert_eq!(table.find("** 2"), Some((TokenKind::LpTimes, "**")));
//! ```
use crate::tokenizer::TokenKind;
use lazy_static::lazy_static;
use regex::Regex;

macro_rules! operators {
    ($($kind:ident => $pattern:expr, $breaks:expr;)+) => {
        [
            $(
                ($pattern, TokenKind::$kind, $breaks),
            )+
        ]
    };
}

/// The operator patterns for standard NoTeX as `(pattern, kind, breaks_name)`
///
/// Keyword patterns fold ascii case only and never break names, so they are only recognized at a
/// token boundary. Everything else is a literal symbol that always ends an in-progress name.
pub const NOTEX_OPERATORS: &[(&str, TokenKind, bool)] = &operators!(
    Integral => "(?i-u:int)", false;
    Sum => "(?i-u:sum)", false;
    Production => "(?i-u:production|prod)", false;
    To => "(?i-u:to)", false;
    Of => "(?i-u:of)", false;
    LeftParen => r"\(", true;
    RightParen => r"\)", true;
    Equal => "=", true;
    Geq => ">=", true;
    Leq => "<=", true;
    Neq => "!=", true;
    Approx => "~=", true;
    Plus => r"\+", true;
    Minus => "-", true;
    LpTimes => r"\*\*", true;
    Times => r"\*", true;
    Divide => "/", true;
    Escape => r"\\", true;
    Comma => ",", true;
    Whitespace => r"\s", true;
    Super => r"\^", true;
    Sub => "_", true;
    At => "@", true;
    Mesh => "#", true;
);

lazy_static! {
    static ref DEFAULT_OPERATORS: OperatorTable =
        OperatorTable::from_patterns(NOTEX_OPERATORS.iter().copied())
            .expect("builtin operator patterns compile");
}

/// A single operator descriptor
#[derive(Debug, Clone)]
pub struct Operator {
    /// The kind of token this operator produces
    pub kind: TokenKind,
    /// Whether this operator terminates an in-progress name
    pub breaks_name: bool,
    pattern: Regex,
}

impl Operator {
    /// Create an operator from a regular expression recognizing it
    ///
    /// The pattern is anchored to the start of the remaining input.
    pub fn new(kind: TokenKind, pattern: &str, breaks_name: bool) -> Result<Self, regex::Error> {
        Ok(Operator {
            kind,
            breaks_name,
            pattern: Regex::new(&format!("^(?:{pattern})"))?,
        })
    }

    /// Create a keyword operator that ignores ascii case and doesn't break names
    pub fn keyword(kind: TokenKind, word: &str) -> Result<Self, regex::Error> {
        Self::new(kind, &format!("(?i-u:{})", regex::escape(word)), false)
    }

    /// Create a literal symbol operator that breaks names
    pub fn symbol(kind: TokenKind, symbol: &str) -> Result<Self, regex::Error> {
        Self::new(kind, &regex::escape(symbol), true)
    }

    /// The non-empty prefix of `inp` this operator recognizes
    pub fn recognize<'a>(&self, inp: &'a str) -> Option<&'a str> {
        self.pattern
            .find(inp)
            .map(|found| found.as_str())
            .filter(|found| !found.is_empty())
    }
}

/// An ordered list of operators where the first match wins
///
/// Finding a match takes `O(num_operators)`.
#[derive(Debug, Clone)]
pub struct OperatorTable(Box<[Operator]>);

impl OperatorTable {
    /// The default NoTeX operator table built from [`NOTEX_OPERATORS`]
    pub fn notex() -> &'static Self {
        &DEFAULT_OPERATORS
    }

    /// Create from a vector of operators, keeping their order
    pub fn from_vec<B>(inp: B) -> Self
    where
        B: Into<Vec<Operator>>,
    {
        OperatorTable(inp.into().into())
    }

    /// Compile a table from `(pattern, kind, breaks_name)` triples
    pub fn from_patterns<'p, I>(patterns: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = (&'p str, TokenKind, bool)>,
    {
        patterns
            .into_iter()
            .map(|(pattern, kind, breaks_name)| Operator::new(kind, pattern, breaks_name))
            .collect()
    }

    /// The operators in match order
    pub fn operators(&self) -> &[Operator] {
        &self.0
    }

    /// Find the first operator recognizing a prefix of `inp`
    pub fn find<'a>(&self, inp: &'a str) -> Option<(TokenKind, &'a str)> {
        self.find_where(inp, |_| true)
    }

    /// Find the first name breaking operator recognizing a prefix of `inp`
    pub fn find_breaking<'a>(&self, inp: &'a str) -> Option<(TokenKind, &'a str)> {
        self.find_where(inp, |op| op.breaks_name)
    }

    fn find_where<'a>(
        &self,
        inp: &'a str,
        filter: impl Fn(&Operator) -> bool,
    ) -> Option<(TokenKind, &'a str)> {
        self.0
            .iter()
            .filter(|&op| filter(op))
            .find_map(|op| op.recognize(inp).map(|text| (op.kind, text)))
    }
}

impl FromIterator<Operator> for OperatorTable {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Operator>,
    {
        Self::from_vec(iter.into_iter().collect::<Vec<_>>())
    }
}
