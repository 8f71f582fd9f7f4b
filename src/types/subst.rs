use std::collections::HashMap;
use std::fmt;

use tracing::trace;

use super::ty::{MonoType, PolyType, TypeQuantifier};

/// Anything a substitution can be pushed through.
pub trait Substitutable: Sized {
    fn apply_subst(&self, subst: &Substitution) -> Self;
}

/// Finite map from type-variable names to monotypes. Variables without an
/// entry are left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Substitution(pub HashMap<String, MonoType>);

impl Substitution {
    pub fn empty() -> Self {
        Substitution(HashMap::new())
    }

    pub fn singleton(var: impl Into<String>, ty: MonoType) -> Self {
        let mut map = HashMap::new();
        map.insert(var.into(), ty);
        Substitution(map)
    }

    pub fn get(&self, var: &str) -> Option<&MonoType> {
        self.0.get(var)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn apply<T: Substitutable>(&self, value: &T) -> T {
        value.apply_subst(self)
    }

    /// `self.combine(other)` applies `other` first and `self` second:
    /// `self.combine(other).apply(t) == self.apply(&other.apply(t))`.
    pub fn combine(&self, other: &Substitution) -> Substitution {
        let mut result = self.0.clone();
        for (var, ty) in &other.0 {
            result.insert(var.clone(), self.apply(ty));
        }
        let combined = Substitution(result);
        trace!(outer = %self, inner = %other, result = %combined, "combine");
        combined
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut entries: Vec<_> = self.0.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        write!(f, "{{")?;
        for (i, (var, ty)) in entries.into_iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} := {}", var, ty)?;
        }
        write!(f, "}}")
    }
}

impl Substitutable for MonoType {
    fn apply_subst(&self, subst: &Substitution) -> Self {
        match self {
            MonoType::Var(v) => subst.get(&v.name).cloned().unwrap_or_else(|| self.clone()),
            _ => self.map_arguments(|arg| arg.apply_subst(subst)),
        }
    }
}

// Binders are not special-cased: callers keep bound names out of the
// substitution's domain.
impl Substitutable for PolyType {
    fn apply_subst(&self, subst: &Substitution) -> Self {
        match self {
            PolyType::Mono(mono) => PolyType::Mono(mono.apply_subst(subst)),
            PolyType::Quantifier(q) => PolyType::Quantifier(TypeQuantifier {
                param: q.param.clone(),
                body: Box::new(q.body.apply_subst(subst)),
            }),
        }
    }
}

/// Pushing `subst` through another substitution composes them, with the
/// receiver's bindings applied first.
impl Substitutable for Substitution {
    fn apply_subst(&self, subst: &Substitution) -> Self {
        subst.combine(self)
    }
}
