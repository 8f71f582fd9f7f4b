use algow::lexer::Token;

#[test]
fn lex_identifiers() {
    let tokens = Token::lex("foo bar baz").unwrap();
    assert_eq!(tokens.len(), 3);
    assert!(matches!(&tokens[0], Token::Ident(i) if i.value == "foo"));
    assert!(matches!(&tokens[1], Token::Ident(i) if i.value == "bar"));
    assert!(matches!(&tokens[2], Token::Ident(i) if i.value == "baz"));
}

#[test]
fn lex_identifier_with_digits_and_prime() {
    let tokens = Token::lex("f1 x'").unwrap();
    assert_eq!(tokens.len(), 2);
    assert!(matches!(&tokens[0], Token::Ident(i) if i.value == "f1"));
    assert!(matches!(&tokens[1], Token::Ident(i) if i.value == "x'"));
}

#[test]
fn lex_punctuation() {
    let tokens = Token::lex(". ( )").unwrap();
    assert_eq!(tokens.len(), 3);
    assert!(matches!(tokens[0], Token::Dot(_)));
    assert!(matches!(tokens[1], Token::LParen(_)));
    assert!(matches!(tokens[2], Token::RParen(_)));
}

#[test]
fn lex_abstraction() {
    let tokens = Token::lex("x.x").unwrap();
    assert_eq!(tokens.len(), 3);
    assert!(matches!(&tokens[0], Token::Ident(i) if i.value == "x"));
    assert!(matches!(tokens[1], Token::Dot(_)));
    assert!(matches!(&tokens[2], Token::Ident(i) if i.value == "x"));
}

#[test]
fn lex_given_example() {
    let tokens = Token::lex("(x.x z) y").unwrap();
    assert_eq!(tokens.len(), 7);
    assert!(matches!(tokens[0], Token::LParen(_)));
    assert!(matches!(tokens[5], Token::RParen(_)));
    assert!(matches!(&tokens[6], Token::Ident(i) if i.value == "y"));
}

#[test]
fn lex_describe() {
    let tokens = Token::lex("x .").unwrap();
    assert_eq!(tokens[0].describe(), "identifier 'x'");
    assert_eq!(tokens[1].describe(), "'.'");
}
