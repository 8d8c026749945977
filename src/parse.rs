use crate::error::ParseError;
use crate::parselets;
use crate::tokenizer::{Token, TokenKind, Tokenizer};
use crate::tree::Node;
use log::trace;
use std::collections::VecDeque;

/// The deepest an expression tree may nest before parsing fails with [`ParseError::TooDeep`]
pub const MAX_DEPTH: usize = 256;

/// A precedence climbing parser over a finished token sequence
///
/// Tokens are consumed from the front and never put back. Looking past the end yields
/// [`Token::eof`].
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    tokens: VecDeque<Token<'a>>,
    depth: usize,
}

impl<'a> Parser<'a> {
    /// Create a parser over any sequence of tokens
    pub fn new<T>(tokens: T) -> Self
    where
        T: IntoIterator<Item = Token<'a>>,
    {
        Parser {
            tokens: tokens.into_iter().collect(),
            depth: 0,
        }
    }

    /// The next token without consuming it
    pub fn peek(&self) -> Token<'a> {
        self.tokens.front().copied().unwrap_or_else(Token::eof)
    }

    /// Consume the next token
    pub fn consume(&mut self) -> Token<'a> {
        self.tokens.pop_front().unwrap_or_else(Token::eof)
    }

    /// Consume the next token only if it has the expected kind
    pub fn expect(&mut self, expected: TokenKind) -> Result<Token<'a>, ParseError> {
        let next = self.peek();
        if next.kind == expected {
            trace!("consumed {expected:?}");
            Ok(self.consume())
        } else {
            Err(ParseError::Expected {
                expected,
                kind: next.kind,
                text: next.text.to_owned(),
            })
        }
    }

    /// Whether every token has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Parse the next expression, continuing only with operators binding tighter than `precedence`
    ///
    /// Fails with [`ParseError::TooDeep`] once the tree would nest more than [`MAX_DEPTH`] levels.
    pub fn parse_expression(&mut self, precedence: u8) -> Result<Node<'a>, ParseError> {
        let depth = self.depth;
        let res = self.parse_nested(precedence);
        self.depth = depth;
        res
    }

    // every node built here is one level deeper, including each link of an operator chain
    fn descend(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            Err(ParseError::TooDeep { limit: MAX_DEPTH })
        } else {
            Ok(())
        }
    }

    fn parse_nested(&mut self, precedence: u8) -> Result<Node<'a>, ParseError> {
        self.descend()?;
        let token = self.consume();
        let prefix = parselets::prefix(token.kind).ok_or_else(|| ParseError::Unexpected {
            kind: token.kind,
            text: token.text.to_owned(),
        })?;
        trace!("prefix {:?} {:?} above {precedence}", token.kind, token.text);
        let mut left = prefix.parse(self, token)?;
        while let Some(infix) = parselets::infix(self.peek().kind)
            .filter(|infix| infix.precedence().rank() > precedence)
        {
            self.descend()?;
            let token = self.consume();
            trace!("infix {:?} above {precedence}", token.kind);
            left = infix.parse(self, left, token)?;
        }
        Ok(left)
    }
}

/// Parse a sequence of tokens into back-to-back expressions
pub fn parse_tokens<'a, T>(tokens: T) -> Result<Vec<Node<'a>>, ParseError>
where
    T: IntoIterator<Item = Token<'a>>,
{
    let mut parser = Parser::new(tokens);
    let mut exprs = Vec::new();
    while !parser.is_exhausted() {
        exprs.push(parser.parse_expression(0)?);
    }
    Ok(exprs)
}

/// Parse a string into back-to-back expressions using the default operators
pub fn parse(inp: &str) -> Result<Vec<Node<'_>>, ParseError> {
    parse_tokens(Tokenizer::new(inp))
}
