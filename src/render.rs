use crate::error::{Position, RenderError};
use crate::tokenizer::TokenKind;
use crate::tree::{Binary, Bounded, Node, Postfix, Prefix};

fn symbol(op: TokenKind, position: Position) -> Result<&'static str, RenderError> {
    let symbol = match (op, position) {
        (TokenKind::Plus, Position::Prefix | Position::Infix) => "+",
        (TokenKind::Minus, Position::Prefix | Position::Infix) => "-",
        (TokenKind::Times | TokenKind::LpTimes, Position::Infix) => "\\cdot",
        (TokenKind::Equal, Position::Infix) => "=",
        (TokenKind::Geq, Position::Infix) => "\\geq",
        (TokenKind::Leq, Position::Infix) => "\\leq",
        (TokenKind::Neq, Position::Infix) => "\\neq",
        (TokenKind::Approx, Position::Infix) => "\\approx",
        (TokenKind::To, Position::Infix) => "\\to",
        (TokenKind::Integral, Position::Bounded) => "\\int",
        (TokenKind::Sum, Position::Bounded) => "\\sum",
        (TokenKind::Production, Position::Bounded) => "\\prod",
        _ => return Err(RenderError::NoSymbol { op, position }),
    };
    Ok(symbol)
}

fn render_prefix(prefix: &Prefix<'_>) -> Result<String, RenderError> {
    let operand = render(prefix.operand())?;
    Ok(match prefix.op {
        TokenKind::Escape => format!("\\{operand}"),
        TokenKind::Sub => format!("_{{{operand}}}"),
        TokenKind::Super => format!("^{{{operand}}}"),
        op => format!("{}{operand}", symbol(op, Position::Prefix)?),
    })
}

fn render_postfix(postfix: &Postfix<'_>) -> Result<String, RenderError> {
    let operand = render(postfix.operand())?;
    Ok(match postfix.op {
        TokenKind::At => format!("\\hat{{{operand}}}"),
        TokenKind::Mesh => format!("\\vec{{{operand}}}"),
        op => format!("{operand}{}", symbol(op, Position::Postfix)?),
    })
}

fn render_binary(binary: &Binary<'_>) -> Result<String, RenderError> {
    let left = render(binary.left())?;
    let right = render(binary.right())?;
    Ok(match binary.op {
        TokenKind::Sub => format!("{left}_{{{right}}}"),
        TokenKind::Super => format!("{left}^{{{right}}}"),
        TokenKind::Divide => format!("\\frac{{{left}}}{{{right}}}"),
        op => format!("{left} {} {right}", symbol(op, Position::Infix)?),
    })
}

fn render_bounded(bounded: &Bounded<'_>) -> Result<String, RenderError> {
    let symbol = symbol(bounded.op, Position::Bounded)?;
    let mut bounds = Vec::with_capacity(bounded.bounds().len() + 1);
    if bounded.bounds().is_empty() {
        bounds.push(symbol.to_owned());
    }
    for bound in bounded.bounds() {
        bounds.push(match bound {
            Node::Binary(range) if range.op == TokenKind::To => format!(
                "{symbol}_{{{}}}^{{{}}}",
                render(range.left())?,
                render(range.right())?
            ),
            bound => format!("{symbol}^{{{}}}", render(bound)?),
        });
    }
    bounds.push(render(bounded.body())?);
    Ok(bounds.join(" "))
}

/// Render a parsed expression as LaTeX
///
/// # Example
/// ```
/// use notex::render;
/// use notex::tree::{Bounded, Node};
/// use notex::TokenKind;
///
/// let node: Node = Bounded::new(TokenKind::Sum, ["n"], "x").into();
/// assert_eq!(render(&node).unwrap(), r"\sum^{n} x");
/// ```
pub fn render(node: &Node<'_>) -> Result<String, RenderError> {
    match node {
        Node::Raw(text) => Ok((*text).to_owned()),
        Node::Prefix(prefix) => render_prefix(prefix),
        Node::Postfix(postfix) => render_postfix(postfix),
        Node::Binary(binary) => render_binary(binary),
        Node::Bounded(bounded) => render_bounded(bounded),
    }
}

#[cfg(test)]
mod tests {
    use super::render;
    use crate::error::{Position, RenderError};
    use crate::tree::{Binary, Bounded, Node, Postfix, Prefix};
    use crate::TokenKind;

    fn assert_renders<'a>(node: impl Into<Node<'a>>, expected: &str) {
        assert_eq!(render(&node.into()).unwrap(), expected);
    }

    fn pi() -> Prefix<'static> {
        Prefix::new(TokenKind::Escape, "pi")
    }

    #[test]
    fn raw() {
        assert_renders("hello world", "hello world");
    }

    #[test]
    fn arithmetic() {
        assert_renders(Binary::new(TokenKind::Plus, "a", "b"), "a + b");
        assert_renders(
            Binary::new(
                TokenKind::Times,
                Binary::new(TokenKind::Plus, "a", "c"),
                "b",
            ),
            r"a + c \cdot b",
        );
        assert_renders(Binary::new(TokenKind::LpTimes, "a", "b"), r"a \cdot b");
        assert_renders(Prefix::new(TokenKind::Minus, "x"), "-x");
    }

    #[test]
    fn comparisons() {
        assert_renders(Binary::new(TokenKind::Geq, "a", "b"), r"a \geq b");
        assert_renders(Binary::new(TokenKind::Approx, "a", "b"), r"a \approx b");
        assert_renders(Binary::new(TokenKind::To, "a", "b"), r"a \to b");
    }

    #[test]
    fn escapes() {
        assert_renders(pi(), r"\pi");
    }

    #[test]
    fn scripts() {
        assert_renders(Binary::new(TokenKind::Super, "x", "2"), "x^{2}");
        assert_renders(Binary::new(TokenKind::Sub, "x", "i"), "x_{i}");
        assert_renders(Prefix::new(TokenKind::Sub, "i"), "_{i}");
        assert_renders(Prefix::new(TokenKind::Super, "2"), "^{2}");
    }

    #[test]
    fn fractions() {
        assert_renders(
            Binary::new(
                TokenKind::Divide,
                Binary::new(TokenKind::Divide, "a", "b"),
                "c",
            ),
            r"\frac{\frac{a}{b}}{c}",
        );
    }

    #[test]
    fn decorations() {
        assert_renders(Postfix::new(TokenKind::At, "x"), r"\hat{x}");
        assert_renders(Postfix::new(TokenKind::Mesh, "v"), r"\vec{v}");
    }

    #[test]
    fn integrals() {
        let node = Bounded::new(
            TokenKind::Integral,
            [
                Node::from(Binary::new(TokenKind::To, "0", pi())),
                Node::Raw("infinity"),
            ],
            "x",
        );
        assert_renders(node, r"\int_{0}^{\pi} \int^{infinity} x");
    }

    #[test]
    fn unbounded() {
        assert_renders(Bounded::unbounded(TokenKind::Integral, "x"), r"\int x");
        assert_renders(Bounded::unbounded(TokenKind::Production, "x"), r"\prod x");
        assert_renders(Bounded::new(TokenKind::Sum, ["n"], "i"), r"\sum^{n} i");
    }

    #[test]
    fn missing_symbols() {
        let node = Node::from(Binary::new(TokenKind::Comma, "a", "b"));
        assert_eq!(
            render(&node),
            Err(RenderError::NoSymbol {
                op: TokenKind::Comma,
                position: Position::Infix,
            })
        );
        let node = Node::from(Postfix::new(TokenKind::Minus, "a"));
        assert_eq!(
            render(&node),
            Err(RenderError::NoSymbol {
                op: TokenKind::Minus,
                position: Position::Postfix,
            })
        );
    }
}
