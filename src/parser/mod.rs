mod combinators;
mod grammar;
mod state;

pub use combinators::*;
pub use grammar::*;
pub use state::{ParseError, ParseResult, ParseState, Parser};

use crate::ast::SyntaxNode;
use crate::lexer::Token;

/// Lex and parse `source` into a syntax tree.
pub fn parse_source(source: &str) -> ParseResult<SyntaxNode> {
    let tokens = Token::lex(source).map_err(|err| ParseError::new(err.to_string()))?;
    let mut state = ParseState::new(tokens);
    parse(&mut state)
}
