//! Grammar rules for lambda expressions
//!
//! ```text
//! expression  := abstraction | application
//! abstraction := IDENT "." expression
//! application := atom (abstraction | atom)*
//! atom        := IDENT | "(" expression ")"
//! ```
//!
//! Application is left-associative and an abstraction body extends as far
//! to the right as possible, so `f x.x y` reads as `f (x.(x y))`.

use crate::ast::{ABSTRACTION, APPLICATION, Branch, Identifier, SyntaxNode};
use crate::lexer::Token;

use super::combinators::{BoxedParser, expect_dot, expect_ident, expect_lparen, expect_rparen, many};
use super::state::{ParseError, ParseResult, ParseState, Parser};

/// ident := IDENT
pub fn ident() -> BoxedParser<Identifier> {
    BoxedParser::new(|state: &mut ParseState| match expect_ident().parse(state)? {
        Token::Ident(id) => Ok(Identifier {
            value: id.value,
            position: id.position,
        }),
        other => Err(ParseError::new("unexpected token")
            .expected("identifier")
            .found(other.describe())
            .at(other.pos())),
    })
}

/// Defers construction of the expression parser until parse time, which
/// keeps the mutually recursive rules from building each other forever.
fn nested_expression() -> BoxedParser<SyntaxNode> {
    BoxedParser::new(|state: &mut ParseState| expression().parse(state))
}

/// atom := IDENT | "(" expression ")"
fn atom() -> BoxedParser<SyntaxNode> {
    let leaf = ident() >> SyntaxNode::Leaf;
    let group = expect_lparen() * nested_expression() - expect_rparen();
    leaf | group
}

/// abstraction := IDENT "." expression
pub fn abstraction() -> BoxedParser<SyntaxNode> {
    (ident() - expect_dot()) + nested_expression()
        >> |(param, body): (Identifier, SyntaxNode)| {
            let position = param.position.merge(&body.position());
            SyntaxNode::Branch(Branch {
                kind: ABSTRACTION.to_string(),
                children: vec![SyntaxNode::Leaf(param), body],
                position,
            })
        }
}

/// application := atom (abstraction | atom)*
pub fn application() -> BoxedParser<SyntaxNode> {
    atom() + many(abstraction() | atom())
        >> |(head, args): (SyntaxNode, Vec<SyntaxNode>)| {
            args.into_iter().fold(head, |left, right| {
                let position = left.position().merge(&right.position());
                SyntaxNode::Branch(Branch {
                    kind: APPLICATION.to_string(),
                    children: vec![left, right],
                    position,
                })
            })
        }
}

/// expression := abstraction | application
pub fn expression() -> BoxedParser<SyntaxNode> {
    abstraction() | application()
}

/// Parse a complete expression, rejecting any trailing tokens.
pub fn parse(state: &mut ParseState) -> ParseResult<SyntaxNode> {
    let node = expression().parse(state)?;
    match state.peek() {
        Some(tok) => Err(ParseError::new("unexpected trailing input")
            .expected("end of input")
            .found(tok.describe())
            .at(tok.pos())),
        None => Ok(node),
    }
}
