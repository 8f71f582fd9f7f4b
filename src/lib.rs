//! # algow - Algorithm W for a tiny lambda calculus
//!
//! Hindley-Milner type inference for untyped lambda terms over a handful of
//! built-in types (`Int`, `Bool`, functions and lists). Given a typing
//! environment and an expression, the engine computes the expression's
//! principal type or reports why it is ill-typed.
//!
//! ## Pipeline
//!
//! ```text
//! Source Code (String)
//!     ↓
//! [Lexer] → Token Stream
//!     ↓
//! [Parser] → Syntax Tree (ast::SyntaxNode)
//!     ↓
//! [Algorithm W] → (Substitution, MonoType)
//! ```
//!
//! ## Surface Syntax
//!
//! - identifiers are bare names: `x`, `succ`
//! - abstraction is `param.body`: `x.x`
//! - application is left-associative juxtaposition: `f a b`
//! - parentheses group: `(x.x z) y`
//!
//! ## Module Structure
//!
//! - [`lexer`] - Tokenization using lachs
//! - [`parser`] - Combinator-based parser producing the syntax tree
//! - [`ast`] - The abstraction/application tree handed to inference
//! - [`types`] - Types, substitutions, unification and Algorithm W
//!
//! ## Example
//!
//! ```no_run
//! use algow::type_of;
//! use algow::types::Context;
//!
//! let ty = type_of("(x.x z) y", &Context::prelude()).unwrap();
//! assert_eq!(ty.to_string(), "Bool");
//! ```

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod types;

use types::{Context, Infer, MonoType};

/// Parse `source` and infer its type in `env` with a fresh engine.
pub fn type_of(source: &str, env: &Context) -> anyhow::Result<MonoType> {
    let expr = parser::parse_source(source)?;
    let ty = Infer::new().infer_type(env, &expr)?;
    Ok(ty)
}
