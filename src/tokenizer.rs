use crate::operators::OperatorTable;
use std::iter::FusedIterator;

/// A parsed token label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// An integral introducer `int`
    Integral,
    /// A sum introducer `sum`
    Sum,
    /// A product introducer `production` or `prod`
    Production,
    /// A range `to`
    To,
    /// The terminator of bounds `of`
    Of,
    /// An opening parenthesis `(`
    LeftParen,
    /// A closing parenthesis `)`
    RightParen,
    /// `=`
    Equal,
    /// `>=`
    Geq,
    /// `<=`
    Leq,
    /// `!=`
    Neq,
    /// `~=`
    Approx,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// A loosely binding product `**`
    LpTimes,
    /// `*`
    Times,
    /// A fraction `/`
    Divide,
    /// A symbol escape `\`
    Escape,
    /// A separator of bounds `,`
    Comma,
    /// A single whitespace character
    Whitespace,
    /// A superscript `^`
    Super,
    /// A subscript `_`
    Sub,
    /// A hat decoration `@`
    At,
    /// A vector decoration `#`
    Mesh,
    /// Free-form text
    Name,
    /// The end of input
    Eof,
}

/// A classified token borrowing its text from the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The kind of token
    pub kind: TokenKind,
    /// The literal text of the token
    pub text: &'a str,
}

impl<'a> Token<'a> {
    /// Create a token from its kind and text
    pub fn new(kind: TokenKind, text: &'a str) -> Self {
        Token { kind, text }
    }

    /// The end of input sentinel
    pub fn eof() -> Self {
        Token::new(TokenKind::Eof, "")
    }
}

/// A tokenizer that emits every operator, including whitespace, and unmerged names
///
/// Names are accumulated until an operator that [breaks names][crate::Operator::breaks_name] is
/// found, so keywords inside a name never split it.
///
/// # Example
/// ```
/// use notex::{RawTokenizer, Token, TokenKind};
/// let res: Vec<_> = RawTokenizer::new("hisum x").collect();
/// assert_eq!(
///     res,
///     [
///         Token::new(TokenKind::Name, "hisum"),
///         Token::new(TokenKind::Whitespace, " "),
///         Token::new(TokenKind::Name, "x"),
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RawTokenizer<'a, 'b> {
    input: &'a str,
    cursor: usize,
    operators: &'b OperatorTable,
}

impl<'a> RawTokenizer<'a, 'static> {
    /// Create a new raw tokenizer with the default operators
    pub fn new(inp: &'a str) -> Self {
        Self::with_operators(inp, OperatorTable::notex())
    }
}

impl<'a, 'b> RawTokenizer<'a, 'b> {
    /// Create a new raw tokenizer with a custom operator table
    pub fn with_operators(inp: &'a str, operators: &'b OperatorTable) -> Self {
        RawTokenizer {
            input: inp,
            cursor: 0,
            operators,
        }
    }

    /// The byte offset of the read cursor
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn remaining(&self) -> &'a str {
        &self.input[self.cursor..]
    }
}

impl<'a, 'b> Iterator for RawTokenizer<'a, 'b> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let remaining = self.remaining();
        if remaining.is_empty() {
            return None;
        }
        if let Some((kind, text)) = self.operators.find(remaining) {
            self.cursor += text.len();
            return Some(Token::new(kind, text));
        }
        // the first char always belongs to the name, even if it looks like a keyword
        let len = remaining
            .char_indices()
            .skip(1)
            .find(|&(i, _)| self.operators.find_breaking(&remaining[i..]).is_some())
            .map(|(i, _)| i)
            .unwrap_or(remaining.len());
        self.cursor += len;
        Some(Token::new(TokenKind::Name, &remaining[..len]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining().len();
        (remaining.min(1), Some(remaining))
    }
}

impl<'a, 'b> FusedIterator for RawTokenizer<'a, 'b> {}

/// A tokenizer that merges runs of names and whitespace and drops all other whitespace
///
/// A merged name is the exact input slice spanning the run, so interior whitespace is kept as
/// written while leading and trailing whitespace is dropped.
///
/// # Example
/// ```
/// use notex::{Tokenizer, Token, TokenKind};
/// let res: Vec<_> = Tokenizer::new("a b 2 + 3").collect();
/// assert_eq!(
///     res,
///     [
///         Token::new(TokenKind::Name, "a b 2"),
///         Token::new(TokenKind::Plus, "+"),
///         Token::new(TokenKind::Name, "3"),
///     ]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'a, 'b> {
    raw: RawTokenizer<'a, 'b>,
    pending: Option<Token<'a>>,
}

impl<'a> Tokenizer<'a, 'static> {
    /// Create a new tokenizer with the default operators
    pub fn new(inp: &'a str) -> Self {
        Self::with_operators(inp, OperatorTable::notex())
    }
}

impl<'a, 'b> Tokenizer<'a, 'b> {
    /// Create a new tokenizer with a custom operator table
    pub fn with_operators(inp: &'a str, operators: &'b OperatorTable) -> Self {
        Tokenizer {
            raw: RawTokenizer::with_operators(inp, operators),
            pending: None,
        }
    }

    fn merge_name(&mut self, first: Token<'a>) -> Token<'a> {
        let mut end = self.raw.cursor();
        let start = end - first.text.len();
        while let Some(token) = self.raw.next() {
            match token.kind {
                TokenKind::Name => end = self.raw.cursor(),
                TokenKind::Whitespace => {}
                _ => {
                    self.pending = Some(token);
                    break;
                }
            }
        }
        Token::new(TokenKind::Name, &self.raw.input[start..end])
    }
}

impl<'a, 'b> Iterator for Tokenizer<'a, 'b> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            // NOTE pending tokens are never names, so the raw cursor is right after `token` when
            // a name starts
            let token = self.pending.take().or_else(|| self.raw.next())?;
            match token.kind {
                TokenKind::Whitespace => {}
                TokenKind::Name => return Some(self.merge_name(token)),
                _ => return Some(token),
            }
        }
    }
}

impl<'a, 'b> FusedIterator for Tokenizer<'a, 'b> {}

/// Tokenize an entire string with the default operators
pub fn tokenize(inp: &str) -> Vec<Token<'_>> {
    Tokenizer::new(inp).collect()
}

#[cfg(test)]
mod tests {
    use super::{tokenize, RawTokenizer, Token, TokenKind};
    use crate::{Operator, OperatorTable, Tokenizer};

    fn name(text: &str) -> Token<'_> {
        Token::new(TokenKind::Name, text)
    }

    #[test]
    fn single_operator() {
        assert_eq!(tokenize("+"), [Token::new(TokenKind::Plus, "+")]);
    }

    #[test]
    fn single_name() {
        assert_eq!(tokenize("test"), [name("test")]);
    }

    #[test]
    fn without_names() {
        assert_eq!(
            tokenize("+-*~="),
            [
                Token::new(TokenKind::Plus, "+"),
                Token::new(TokenKind::Minus, "-"),
                Token::new(TokenKind::Times, "*"),
                Token::new(TokenKind::Approx, "~="),
            ]
        );
    }

    #[test]
    fn with_names() {
        let expected = [
            name("a"),
            Token::new(TokenKind::Plus, "+"),
            name("b"),
            Token::new(TokenKind::Equal, "="),
            name("3"),
            Token::new(TokenKind::Times, "*"),
            name("2"),
        ];
        assert_eq!(tokenize("a+b=3*2"), expected);
        assert_eq!(tokenize("a +\tb=3*2"), expected);
    }

    #[test]
    fn merge_whitespace() {
        assert_eq!(tokenize("a b 2"), [name("a b 2")]);
        assert_eq!(tokenize("a  \tb"), [name("a  \tb")]);
    }

    #[test]
    fn drop_outer_whitespace() {
        assert_eq!(
            tokenize("  a b 2 + 3"),
            [name("a b 2"), Token::new(TokenKind::Plus, "+"), name("3")]
        );
        assert_eq!(tokenize("a b 2 \t"), [name("a b 2")]);
        assert!(tokenize(" \t ").is_empty());
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn keywords() {
        assert_eq!(
            tokenize("int sum of to"),
            [
                Token::new(TokenKind::Integral, "int"),
                Token::new(TokenKind::Sum, "sum"),
                Token::new(TokenKind::Of, "of"),
                Token::new(TokenKind::To, "to"),
            ]
        );
    }

    #[test]
    fn mixed_keywords_and_names() {
        assert_eq!(
            tokenize("int 0 to 1 of some x"),
            [
                Token::new(TokenKind::Integral, "int"),
                name("0"),
                Token::new(TokenKind::To, "to"),
                name("1"),
                Token::new(TokenKind::Of, "of"),
                name("some x"),
            ]
        );
    }

    #[test]
    fn keywords_inside_names() {
        assert_eq!(tokenize("hisum"), [name("hisum")]);
        assert_eq!(tokenize("photo"), [name("photo")]);
    }

    #[test]
    fn keywords_at_boundaries() {
        // a boundary is reached after any completed token, even mid-word
        assert_eq!(
            tokenize("integer"),
            [Token::new(TokenKind::Integral, "int"), name("eger")]
        );
        assert_eq!(
            tokenize("x+total"),
            [
                name("x"),
                Token::new(TokenKind::Plus, "+"),
                Token::new(TokenKind::To, "to"),
                name("tal"),
            ]
        );
    }

    #[test]
    fn shared_prefix_operators() {
        assert_eq!(
            tokenize("*****"),
            [
                Token::new(TokenKind::LpTimes, "**"),
                Token::new(TokenKind::LpTimes, "**"),
                Token::new(TokenKind::Times, "*"),
            ]
        );
    }

    #[test]
    fn escapes() {
        assert_eq!(
            tokenize(r"\pi r"),
            [Token::new(TokenKind::Escape, "\\"), name("pi r")]
        );
    }

    #[test]
    fn raw_keeps_whitespace() {
        let tokens: Vec<_> = RawTokenizer::new("a b ").collect();
        assert_eq!(
            tokens,
            [
                name("a"),
                Token::new(TokenKind::Whitespace, " "),
                name("b"),
                Token::new(TokenKind::Whitespace, " "),
            ]
        );
    }

    #[test]
    fn raw_is_fused() {
        let mut raw = RawTokenizer::new("x");
        assert_eq!(raw.next(), Some(name("x")));
        assert_eq!(raw.next(), None);
        assert_eq!(raw.next(), None);
    }

    #[test]
    fn unicode_names() {
        assert_eq!(
            tokenize("αβ+💖 γ"),
            [name("αβ"), Token::new(TokenKind::Plus, "+"), name("💖 γ")]
        );
    }

    #[test]
    fn keywords_need_ascii_letters() {
        assert_eq!(
            tokenize("\u{17f}um of x"),
            [
                name("\u{17f}um"),
                Token::new(TokenKind::Of, "of"),
                name("x"),
            ]
        );
    }

    #[test]
    fn custom_operators() {
        let table = OperatorTable::from_vec([
            Operator::keyword(TokenKind::Of, "over").unwrap(),
            Operator::symbol(TokenKind::Whitespace, " ").unwrap(),
            Operator::symbol(TokenKind::Plus, "plus").unwrap(),
        ]);
        let tokens: Vec<_> = Tokenizer::with_operators("a plus b OVER c", &table).collect();
        assert_eq!(
            tokens,
            [
                name("a"),
                Token::new(TokenKind::Plus, "plus"),
                name("b"),
                Token::new(TokenKind::Of, "OVER"),
                name("c"),
            ]
        );
    }
}
