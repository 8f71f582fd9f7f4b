use std::fmt;

use tracing::trace;

use super::subst::Substitution;
use super::ty::{MonoType, TypeVariable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnifyError {
    Mismatch { left: MonoType, right: MonoType },
    OccursCheck { var: TypeVariable, ty: MonoType },
}

impl fmt::Display for UnifyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            UnifyError::Mismatch { left, right } => {
                write!(f, "cannot unify {} with {}", left, right)
            }
            UnifyError::OccursCheck { var, ty } => {
                write!(
                    f,
                    "occurs check: cannot construct infinite type {} = {}",
                    var, ty
                )
            }
        }
    }
}

impl std::error::Error for UnifyError {}

/// Bind `var` to `ty`, refusing bindings that would build an infinite type.
fn bind(var: &TypeVariable, ty: &MonoType) -> Result<Substitution, UnifyError> {
    if ty.occurs(var) {
        return Err(UnifyError::OccursCheck {
            var: var.clone(),
            ty: ty.clone(),
        });
    }
    Ok(Substitution::singleton(var.name.clone(), ty.clone()))
}

/// Find the most general substitution making `a` and `b` equal.
///
/// Constructor arguments are unified left to right. Each pair is first
/// rewritten with everything learned from the pairs before it, and the new
/// unifier is combined outside the accumulated one:
///
/// ```text
/// unify(_a -> _a, Int -> _b)
///   pair 1: unify(_a, Int)           = {_a := Int}
///   pair 2: unify(Int, _b)           = {_b := Int}
///   result: {_a := Int, _b := Int}
/// ```
pub fn unify(a: &MonoType, b: &MonoType) -> Result<Substitution, UnifyError> {
    trace!(left = %a, right = %b, "unify");
    match (a, b) {
        (MonoType::Var(v1), MonoType::Var(v2)) if v1 == v2 => Ok(Substitution::empty()),
        (MonoType::Var(v), other) | (other, MonoType::Var(v)) => bind(v, other),
        _ => {
            if a.constructor() != b.constructor() {
                return Err(UnifyError::Mismatch {
                    left: a.clone(),
                    right: b.clone(),
                });
            }

            a.arguments()
                .into_iter()
                .zip(b.arguments())
                .try_fold(Substitution::empty(), |acc, (x, y)| {
                    let s = unify(&acc.apply(x), &acc.apply(y))?;
                    Ok(s.combine(&acc))
                })
        }
    }
}
