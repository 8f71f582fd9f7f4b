//! Moving between type schemes and monotypes.
//!
//! [`instantiate`] opens a scheme by replacing every bound name with a fresh
//! variable; [`generalize`] closes a monotype over the variables that the
//! surrounding context does not pin down.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::env::Context;
use super::supply::VarSupply;
use super::ty::{MonoType, PolyType, TypeVariable};

/// Strip the quantifiers off `poly`, giving each bound name a fresh
/// variable. Names that are free in `poly` come through unchanged.
pub fn instantiate(poly: &PolyType, supply: &mut VarSupply) -> MonoType {
    let mut mappings = HashMap::new();
    instantiate_poly(poly, &mut mappings, supply)
}

fn instantiate_poly(
    poly: &PolyType,
    mappings: &mut HashMap<String, TypeVariable>,
    supply: &mut VarSupply,
) -> MonoType {
    match poly {
        PolyType::Mono(mono) => instantiate_mono(mono, mappings),
        PolyType::Quantifier(q) => {
            mappings.insert(q.param.clone(), supply.fresh());
            instantiate_poly(&q.body, mappings, supply)
        }
    }
}

fn instantiate_mono(mono: &MonoType, mappings: &HashMap<String, TypeVariable>) -> MonoType {
    match mono {
        MonoType::Var(v) => mappings
            .get(&v.name)
            .map(|fresh| MonoType::Var(fresh.clone()))
            .unwrap_or_else(|| mono.clone()),
        _ => mono.map_arguments(|arg| instantiate_mono(arg, mappings)),
    }
}

/// Quantify `mono` over its free variables that are not free in `ctx`.
///
/// The first variable met while walking `mono` becomes the innermost
/// binder, so `a -> b` generalizes to `forall b. forall a. a -> b`.
pub fn generalize(ctx: &Context, mono: &MonoType) -> PolyType {
    let ctx_free: HashSet<String> = ctx.free_variables().into_iter().collect();
    let mut seen = HashSet::new();
    let quantified: Vec<String> = mono
        .free_variables()
        .into_iter()
        .filter(|v| !ctx_free.contains(v))
        .filter(|v| seen.insert(v.clone()))
        .collect();

    let poly = quantified
        .into_iter()
        .fold(PolyType::Mono(mono.clone()), |body, var| {
            PolyType::forall(var, body)
        });
    debug!(mono = %mono, scheme = %poly, "generalized");
    poly
}
