use lachs::Span;

#[lachs::token]
pub enum Token {
    #[literal("[a-zA-Z_][a-zA-Z0-9_']*")]
    Ident,
    #[terminal(".")]
    Dot,
    #[terminal("(")]
    LParen,
    #[terminal(")")]
    RParen,
}

impl Token {
    pub fn pos(&self) -> Span {
        match self {
            Token::Ident(inner) => inner.position.clone(),
            Token::Dot(inner) => inner.position.clone(),
            Token::LParen(inner) => inner.position.clone(),
            Token::RParen(inner) => inner.position.clone(),
        }
    }

    /// Returns a human-readable description of the token
    pub fn describe(&self) -> String {
        match self {
            Token::Ident(inner) => format!("identifier '{}'", inner.value),
            Token::Dot(_) => "'.'".to_string(),
            Token::LParen(_) => "'('".to_string(),
            Token::RParen(_) => "')'".to_string(),
        }
    }
}
