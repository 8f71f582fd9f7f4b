//! # Type Error Definitions
//!
//! Inference fails when:
//!
//! - an identifier is used with no binding in scope (`UnboundVariable`)
//! - two types cannot be made equal (`Unification`)
//! - a type would have to contain itself (`InfiniteType`)
//! - the syntax tree does not have the abstraction/application shape the
//!   engine understands (`MalformedExpression`)
//!
//! Every failure is permanent for its input and is handed straight back to
//! the caller.
//!
//! ## Error Reporting
//!
//! Errors carry the source span of the offending node. When the span has
//! source text attached, `Display` renders it with location context;
//! otherwise the message is prefixed with `Type error:`.

use std::fmt;

use lachs::Span;

use super::ty::{MonoType, TypeVariable};
use super::unify::UnifyError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    /// Reference to an identifier with no entry in the environment.
    UnboundVariable { name: String, span: Span },

    /// Two monotypes with different constructors had to be equal.
    Unification {
        left: MonoType,
        right: MonoType,
        span: Span,
    },

    /// Binding `var` to `ty` would create an infinite type, since `var`
    /// occurs in `ty`.
    InfiniteType {
        var: TypeVariable,
        ty: MonoType,
        span: Span,
    },

    /// The parser produced a node the engine has no rule for.
    MalformedExpression { reason: String, span: Span },
}

impl TypeError {
    pub fn unbound_variable(name: String, span: Span) -> Self {
        TypeError::UnboundVariable { name, span }
    }

    pub fn unification(left: MonoType, right: MonoType, span: Span) -> Self {
        TypeError::Unification { left, right, span }
    }

    pub fn infinite_type(var: TypeVariable, ty: MonoType, span: Span) -> Self {
        TypeError::InfiniteType { var, ty, span }
    }

    pub fn malformed_expression(reason: impl Into<String>, span: Span) -> Self {
        TypeError::MalformedExpression {
            reason: reason.into(),
            span,
        }
    }

    /// Attach `span` to an error coming out of unification.
    pub fn from_unify_error(err: UnifyError, span: Span) -> Self {
        match err {
            UnifyError::Mismatch { left, right } => TypeError::unification(left, right, span),
            UnifyError::OccursCheck { var, ty } => TypeError::infinite_type(var, ty, span),
        }
    }

    pub fn span(&self) -> &Span {
        match self {
            TypeError::UnboundVariable { span, .. }
            | TypeError::Unification { span, .. }
            | TypeError::InfiniteType { span, .. }
            | TypeError::MalformedExpression { span, .. } => span,
        }
    }

    fn message(&self) -> String {
        match self {
            TypeError::UnboundVariable { name, .. } => format!("unbound variable: {}", name),
            TypeError::Unification { left, right, .. } => {
                format!("cannot unify {} with {}", left, right)
            }
            TypeError::InfiniteType { var, ty, .. } => {
                format!("cannot construct infinite type: {} = {}", var, ty)
            }
            TypeError::MalformedExpression { reason, .. } => {
                format!("malformed expression: {}", reason)
            }
        }
    }
}

impl fmt::Display for TypeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let msg = self.message();
        let span = self.span();
        if span.source.is_empty() {
            write!(f, "Type error: {}", msg)
        } else {
            write!(f, "{}", span.to_string(&msg))
        }
    }
}

impl std::error::Error for TypeError {}
