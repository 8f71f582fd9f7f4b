//! # Syntax Tree Contract
//!
//! The parser hands the type checker a deliberately small tree. A node is
//! either a leaf carrying an identifier, or a branch tagged with a rule name
//! and an ordered list of children:
//!
//! ```text
//! abstraction  [param-leaf, body]
//! application  [left, right]
//! ```
//!
//! The inference engine dispatches on the tag string, so any other tag (or a
//! branch with the wrong children) is reported as a malformed expression
//! instead of being silently accepted.

use std::fmt;

use lachs::Span;

/// Tag of a lambda abstraction branch.
pub const ABSTRACTION: &str = "abstraction";

/// Tag of a function application branch.
pub const APPLICATION: &str = "application";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    Leaf(Identifier),
    Branch(Branch),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub value: String,
    pub position: Span,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branch {
    pub kind: String,
    pub children: Vec<SyntaxNode>,
    pub position: Span,
}

impl SyntaxNode {
    pub fn ident(name: impl Into<String>) -> Self {
        SyntaxNode::Leaf(Identifier {
            value: name.into(),
            position: Span::default(),
        })
    }

    pub fn abstraction(param: impl Into<String>, body: SyntaxNode) -> Self {
        SyntaxNode::branch(ABSTRACTION, vec![SyntaxNode::ident(param), body])
    }

    pub fn application(left: SyntaxNode, right: SyntaxNode) -> Self {
        SyntaxNode::branch(APPLICATION, vec![left, right])
    }

    pub fn branch(kind: impl Into<String>, children: Vec<SyntaxNode>) -> Self {
        SyntaxNode::Branch(Branch {
            kind: kind.into(),
            children,
            position: Span::default(),
        })
    }

    pub fn position(&self) -> Span {
        match self {
            SyntaxNode::Leaf(ident) => ident.position.clone(),
            SyntaxNode::Branch(branch) => branch.position.clone(),
        }
    }
}

/// Prints a fully parenthesized form that parses back to the same tree.
impl fmt::Display for SyntaxNode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SyntaxNode::Leaf(ident) => write!(f, "{}", ident.value),
            SyntaxNode::Branch(branch) => match (branch.kind.as_str(), branch.children.as_slice()) {
                (ABSTRACTION, [param, body]) => write!(f, "({}.{})", param, body),
                (APPLICATION, [left, right]) => write!(f, "({} {})", left, right),
                (kind, children) => {
                    write!(f, "{}[", kind)?;
                    for (i, child) in children.iter().enumerate() {
                        if i > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", child)?;
                    }
                    write!(f, "]")
                }
            },
        }
    }
}
