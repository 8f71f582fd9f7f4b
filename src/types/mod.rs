pub mod env;
pub mod error;
pub mod infer;
pub mod scheme;
pub mod subst;
pub mod supply;
pub mod ty;
pub mod unify;

pub use env::Context;
pub use error::TypeError;
pub use infer::Infer;
pub use scheme::{generalize, instantiate};
pub use subst::{Substitutable, Substitution};
pub use supply::VarSupply;
pub use ty::{MonoType, PolyType, TypeFunction, TypeQuantifier, TypeVariable};
pub use unify::{UnifyError, unify};
