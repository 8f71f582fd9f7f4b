use std::collections::HashMap;

use super::subst::{Substitutable, Substitution};
use super::ty::{MonoType, PolyType};

/// Typing environment: identifier names mapped to type schemes.
///
/// Extension is persistent. [`Context::extend`] returns a new context and
/// leaves the receiver untouched, so sibling branches of an inference never
/// see each other's lambda parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    bindings: HashMap<String, PolyType>,
}

impl Context {
    pub fn empty() -> Self {
        Context {
            bindings: HashMap::new(),
        }
    }

    pub fn with_bindings(bindings: Vec<(String, PolyType)>) -> Self {
        Context {
            bindings: bindings.into_iter().collect(),
        }
    }

    /// `{ y: Int -> Bool, z: Int }`, the environment the driver types
    /// expressions against when nothing else is supplied.
    pub fn prelude() -> Self {
        Context::with_bindings(vec![
            (
                "y".to_string(),
                MonoType::func(MonoType::Int, MonoType::Bool).into(),
            ),
            ("z".to_string(), MonoType::Int.into()),
        ])
    }

    pub fn lookup(&self, name: &str) -> Option<&PolyType> {
        self.bindings.get(name)
    }

    pub fn extend(&self, name: impl Into<String>, scheme: PolyType) -> Context {
        let mut bindings = self.bindings.clone();
        bindings.insert(name.into(), scheme);
        Context { bindings }
    }

    pub fn extend_many(&self, bindings: Vec<(String, PolyType)>) -> Context {
        let mut new_bindings = self.bindings.clone();
        new_bindings.extend(bindings);
        Context {
            bindings: new_bindings,
        }
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Free variables of every bound scheme, concatenated.
    pub fn free_variables(&self) -> Vec<String> {
        self.bindings
            .values()
            .flat_map(PolyType::free_variables)
            .collect()
    }
}

impl Substitutable for Context {
    fn apply_subst(&self, subst: &Substitution) -> Self {
        Context {
            bindings: self
                .bindings
                .iter()
                .map(|(name, scheme)| (name.clone(), scheme.apply_subst(subst)))
                .collect(),
        }
    }
}
