//! The structures that define a parsed NoTeX expression
//!
//! - [`Node`] - Any expression: a raw leaf or one of the operator shapes below
//! - [`Prefix`] - An operator applied before its operand, e.g. `\pi` or `-x`
//! - [`Postfix`] - An operator applied after its operand, e.g. `x@`
//! - [`Binary`] - An infix operator between two operands, e.g. `a + b`
//! - [`Bounded`] - A sum, product, or integral with any number of bounds and a body
//!
//! Every operator shape implements `Into<Node>`, and their constructors accept anything that
//! converts into a node, so trees can be written bottom-up without wrapping each level.
//!
//! ```
//! use notex::tree::{Binary, Node};
//! use notex::TokenKind;
//!
//! let node: Node = Binary::new(TokenKind::Plus, Node::Raw("a"), Node::Raw("b")).into();
//! ```
use crate::tokenizer::TokenKind;

/// A parsed expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<'a> {
    /// Literal text
    Raw(&'a str),
    /// A prefix operator
    Prefix(Prefix<'a>),
    /// A postfix operator
    Postfix(Postfix<'a>),
    /// An infix operator
    Binary(Binary<'a>),
    /// A bounded operator
    Bounded(Bounded<'a>),
}

/// A prefix operator like `\` or unary `-`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prefix<'a> {
    /// The operator
    pub op: TokenKind,
    operand: Box<Node<'a>>,
}

impl<'a> Prefix<'a> {
    /// Create a prefix operator with its operand
    pub fn new<N>(op: TokenKind, operand: N) -> Self
    where
        N: Into<Node<'a>>,
    {
        Prefix {
            op,
            operand: Box::new(operand.into()),
        }
    }

    /// The operand
    pub fn operand(&self) -> &Node<'a> {
        &self.operand
    }
}

impl<'a> From<Prefix<'a>> for Node<'a> {
    fn from(prefix: Prefix<'a>) -> Self {
        Node::Prefix(prefix)
    }
}

/// A postfix operator like `@`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Postfix<'a> {
    /// The operator
    pub op: TokenKind,
    operand: Box<Node<'a>>,
}

impl<'a> Postfix<'a> {
    /// Create a postfix operator with its operand
    pub fn new<N>(op: TokenKind, operand: N) -> Self
    where
        N: Into<Node<'a>>,
    {
        Postfix {
            op,
            operand: Box::new(operand.into()),
        }
    }

    /// The operand
    pub fn operand(&self) -> &Node<'a> {
        &self.operand
    }
}

impl<'a> From<Postfix<'a>> for Node<'a> {
    fn from(postfix: Postfix<'a>) -> Self {
        Node::Postfix(postfix)
    }
}

/// An infix operator like `+` or `to`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binary<'a> {
    /// The operator
    pub op: TokenKind,
    left: Box<Node<'a>>,
    right: Box<Node<'a>>,
}

impl<'a> Binary<'a> {
    /// Create an infix operator with both operands
    pub fn new<L, R>(op: TokenKind, left: L, right: R) -> Self
    where
        L: Into<Node<'a>>,
        R: Into<Node<'a>>,
    {
        Binary {
            op,
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }

    /// The left operand
    pub fn left(&self) -> &Node<'a> {
        &self.left
    }

    /// The right operand
    pub fn right(&self) -> &Node<'a> {
        &self.right
    }
}

impl<'a> From<Binary<'a>> for Node<'a> {
    fn from(binary: Binary<'a>) -> Self {
        Node::Binary(binary)
    }
}

/// A bounded operator like `sum i = 0 to n of i`
///
/// Bounds are kept in the order they were written and may be empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bounded<'a> {
    /// The operator
    pub op: TokenKind,
    bounds: Box<[Node<'a>]>,
    body: Box<Node<'a>>,
}

impl<'a> Bounded<'a> {
    /// Create a bounded operator from its bounds and body
    pub fn new<T, I, B>(op: TokenKind, bounds: T, body: B) -> Self
    where
        T: IntoIterator<Item = I>,
        I: Into<Node<'a>>,
        B: Into<Node<'a>>,
    {
        Bounded {
            op,
            bounds: bounds.into_iter().map(Into::into).collect(),
            body: Box::new(body.into()),
        }
    }

    /// Create a bounded operator without bounds
    pub fn unbounded<B>(op: TokenKind, body: B) -> Self
    where
        B: Into<Node<'a>>,
    {
        Self::new(op, Vec::<Node<'a>>::new(), body)
    }

    /// The bounds
    pub fn bounds(&self) -> &[Node<'a>] {
        &self.bounds
    }

    /// The body
    pub fn body(&self) -> &Node<'a> {
        &self.body
    }
}

impl<'a> From<Bounded<'a>> for Node<'a> {
    fn from(bounded: Bounded<'a>) -> Self {
        Node::Bounded(bounded)
    }
}

impl<'a> From<&'a str> for Node<'a> {
    fn from(raw: &'a str) -> Self {
        Node::Raw(raw)
    }
}
