use algow::ast::{ABSTRACTION, APPLICATION, SyntaxNode};
use algow::lexer::Token;
use algow::parser::{ParseState, parse, parse_source};

fn parse_expr(input: &str) -> SyntaxNode {
    let tokens = Token::lex(input).expect("lexing failed");
    let mut state = ParseState::new(tokens);
    parse(&mut state).unwrap_or_else(|err| panic!("parsing failed: {}", err))
}

fn kind(node: &SyntaxNode) -> &str {
    match node {
        SyntaxNode::Leaf(_) => "leaf",
        SyntaxNode::Branch(branch) => &branch.kind,
    }
}

#[test]
fn parse_single_identifier() {
    let node = parse_expr("q");
    if let SyntaxNode::Leaf(id) = node {
        assert_eq!(id.value, "q");
    } else {
        panic!("expected leaf");
    }
}

#[test]
fn parse_given_example_shape() {
    let node = parse_expr("(x.x z) y");
    let SyntaxNode::Branch(app) = &node else {
        panic!("expected application");
    };
    assert_eq!(app.kind, APPLICATION);
    assert_eq!(app.children.len(), 2);

    let SyntaxNode::Branch(lambda) = &app.children[0] else {
        panic!("expected abstraction");
    };
    assert_eq!(lambda.kind, ABSTRACTION);
    assert!(matches!(&lambda.children[0], SyntaxNode::Leaf(p) if p.value == "x"));
    assert_eq!(kind(&lambda.children[1]), APPLICATION);

    assert!(matches!(&app.children[1], SyntaxNode::Leaf(y) if y.value == "y"));
}

#[test]
fn parse_matches_hand_built_tree() {
    let expected = SyntaxNode::application(
        SyntaxNode::abstraction(
            "x",
            SyntaxNode::application(SyntaxNode::ident("x"), SyntaxNode::ident("z")),
        ),
        SyntaxNode::ident("y"),
    );
    assert_eq!(parse_expr("(x.x z) y").to_string(), expected.to_string());
}

#[test]
fn parse_left_associative_application() {
    assert_eq!(parse_expr("a b c d").to_string(), "(((a b) c) d)");
}

#[test]
fn parse_parentheses_override_associativity() {
    assert_eq!(parse_expr("a (b c)").to_string(), "(a (b c))");
}

#[test]
fn parse_nested_abstraction() {
    assert_eq!(parse_expr("x.y.x").to_string(), "(x.(y.x))");
}

#[test]
fn parse_redundant_parentheses() {
    assert_eq!(parse_expr("((x))").to_string(), "x");
}

#[test]
fn display_round_trips() {
    for src in ["(x.x z) y", "f x.x y", "x.y.z.x z (y z)", "a (b c) d"] {
        let printed = parse_expr(src).to_string();
        assert_eq!(parse_expr(&printed).to_string(), printed);
    }
}

#[test]
fn parse_source_reports_empty_input() {
    assert!(parse_source("").is_err());
}

#[test]
fn parse_source_reports_missing_body() {
    assert!(parse_source("x.").is_err());
}

#[test]
fn parse_source_reports_stray_paren() {
    let err = parse_source("x y)").unwrap_err();
    assert_eq!(err.found.as_deref(), Some("')'"));
}
