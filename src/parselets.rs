//! Parsing rules bound to each token kind in prefix and infix position
//!
//! Postfix operators are looked up with the infix rules, since both continue an expression that
//! already has a left operand.
use crate::error::ParseError;
use crate::parse::Parser;
use crate::tokenizer::{Token, TokenKind};
use crate::tree::{Binary, Bounded, Node, Postfix, Prefix};
use lazy_static::lazy_static;
use log::trace;

#[cfg(feature = "fnv")]
type ParseletMap<V> = fnv::FnvHashMap<TokenKind, V>;
#[cfg(not(feature = "fnv"))]
type ParseletMap<V> = std::collections::HashMap<TokenKind, V>;

/// Binding strength from loosest to tightest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    /// Introduced by a keyword
    Keyword = 1,
    /// A range `to`
    To,
    /// A separator `,`
    Comma,
    /// Comparisons like `=` or `<=`
    Comparison,
    /// A loose product `**`
    LooseProduct,
    /// Addition and subtraction
    Sum,
    /// Fractions
    Division,
    /// A product `*`
    Product,
    /// Super- and subscripts
    Exponent,
    /// Unused by the default rules, which register super- and subscripts at `Exponent`
    ///
    /// Kept so `Prefix` and `Postfix` rank 11 and 12.
    Script,
    /// Prefix operators
    Prefix,
    /// Postfix operators
    Postfix,
}

impl Precedence {
    /// The numeric rank, where zero binds looser than every operator
    pub fn rank(self) -> u8 {
        self as u8
    }
}

/// How chains of the same operator nest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` is `(a - b) - c`
    Left,
    /// `a = b = c` is `a = (b = c)`
    Right,
}

/// A rule for a token that starts an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixParselet {
    /// A literal name
    Name,
    /// A parenthesized expression that must end with `close`
    Group {
        /// The required closing token
        close: TokenKind,
    },
    /// An operator applied to the expression after it
    Operator {
        /// The precedence its operand is parsed at
        precedence: Precedence,
    },
    /// A sum, product, or integral
    Bounded {
        /// The token between bounds
        separator: TokenKind,
        /// The token ending the bounds
        terminator: TokenKind,
    },
}

/// A rule for a token that continues an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixParselet {
    /// An operator between two expressions
    Binary {
        /// The operator's precedence
        precedence: Precedence,
        /// How chains of the operator nest
        associativity: Associativity,
    },
    /// An operator wrapping the expression before it
    Postfix {
        /// The operator's precedence
        precedence: Precedence,
    },
}

fn left(precedence: Precedence) -> InfixParselet {
    InfixParselet::Binary {
        precedence,
        associativity: Associativity::Left,
    }
}

fn right(precedence: Precedence) -> InfixParselet {
    InfixParselet::Binary {
        precedence,
        associativity: Associativity::Right,
    }
}

const BOUNDED: PrefixParselet = PrefixParselet::Bounded {
    separator: TokenKind::Comma,
    terminator: TokenKind::Of,
};

const PREFIX_OPERATOR: PrefixParselet = PrefixParselet::Operator {
    precedence: Precedence::Prefix,
};

lazy_static! {
    static ref PREFIX_PARSELETS: ParseletMap<PrefixParselet> = [
        (
            TokenKind::LeftParen,
            PrefixParselet::Group {
                close: TokenKind::RightParen,
            },
        ),
        (TokenKind::Escape, PREFIX_OPERATOR),
        (TokenKind::Plus, PREFIX_OPERATOR),
        (TokenKind::Minus, PREFIX_OPERATOR),
        (TokenKind::Super, PREFIX_OPERATOR),
        (TokenKind::Sub, PREFIX_OPERATOR),
        (TokenKind::Name, PrefixParselet::Name),
        (TokenKind::Integral, BOUNDED),
        (TokenKind::Sum, BOUNDED),
        (TokenKind::Production, BOUNDED),
    ]
    .into_iter()
    .collect();
    static ref INFIX_PARSELETS: ParseletMap<InfixParselet> = [
        (TokenKind::Equal, right(Precedence::Comparison)),
        (TokenKind::Geq, right(Precedence::Comparison)),
        (TokenKind::Leq, right(Precedence::Comparison)),
        (TokenKind::Neq, right(Precedence::Comparison)),
        (TokenKind::Approx, right(Precedence::Comparison)),
        (TokenKind::To, right(Precedence::To)),
        (TokenKind::Plus, left(Precedence::Sum)),
        (TokenKind::Minus, left(Precedence::Sum)),
        (TokenKind::LpTimes, left(Precedence::LooseProduct)),
        (TokenKind::Times, left(Precedence::Product)),
        (TokenKind::Divide, left(Precedence::Division)),
        (TokenKind::Super, left(Precedence::Exponent)),
        (TokenKind::Sub, left(Precedence::Exponent)),
        (
            TokenKind::At,
            InfixParselet::Postfix {
                precedence: Precedence::Postfix,
            },
        ),
        (
            TokenKind::Mesh,
            InfixParselet::Postfix {
                precedence: Precedence::Postfix,
            },
        ),
    ]
    .into_iter()
    .collect();
}

/// The prefix rule for a token kind
pub fn prefix(kind: TokenKind) -> Option<PrefixParselet> {
    PREFIX_PARSELETS.get(&kind).copied()
}

/// The infix or postfix rule for a token kind
pub fn infix(kind: TokenKind) -> Option<InfixParselet> {
    INFIX_PARSELETS.get(&kind).copied()
}

/// The rank a token kind continues an expression at, zero if it can't
pub fn precedence(kind: TokenKind) -> u8 {
    infix(kind).map_or(0, |parselet| parselet.precedence().rank())
}

impl PrefixParselet {
    /// Parse the expression started by `token`
    pub fn parse<'a>(
        self,
        parser: &mut Parser<'a>,
        token: Token<'a>,
    ) -> Result<Node<'a>, ParseError> {
        match self {
            PrefixParselet::Name => Ok(Node::Raw(token.text)),
            PrefixParselet::Group { close } => {
                let expr = parser.parse_expression(0)?;
                parser.expect(close)?;
                Ok(expr)
            }
            PrefixParselet::Operator { precedence } => {
                let operand = parser.parse_expression(precedence.rank())?;
                Ok(Prefix::new(token.kind, operand).into())
            }
            PrefixParselet::Bounded {
                separator,
                terminator,
            } => {
                let mut bounds = Vec::new();
                while parser.peek().kind != terminator {
                    bounds.push(parser.parse_expression(0)?);
                    if parser.peek().kind != terminator {
                        parser.expect(separator)?;
                    }
                }
                parser.expect(terminator)?;
                trace!("{:?} with {} bounds", token.kind, bounds.len());
                // the body is greedy and runs to the end of the enclosing expression
                let body = parser.parse_expression(0)?;
                Ok(Bounded::new(token.kind, bounds, body).into())
            }
        }
    }
}

impl InfixParselet {
    /// The precedence this rule continues an expression at
    pub fn precedence(self) -> Precedence {
        match self {
            InfixParselet::Binary { precedence, .. } | InfixParselet::Postfix { precedence } => {
                precedence
            }
        }
    }

    /// Continue `left` with the operator `token`
    pub fn parse<'a>(
        self,
        parser: &mut Parser<'a>,
        left: Node<'a>,
        token: Token<'a>,
    ) -> Result<Node<'a>, ParseError> {
        match self {
            InfixParselet::Binary {
                precedence,
                associativity,
            } => {
                let rank = match associativity {
                    Associativity::Left => precedence.rank(),
                    Associativity::Right => precedence.rank() - 1,
                };
                let right = parser.parse_expression(rank)?;
                Ok(Binary::new(token.kind, left, right).into())
            }
            InfixParselet::Postfix { .. } => Ok(Postfix::new(token.kind, left).into()),
        }
    }
}
