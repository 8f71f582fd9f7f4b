use tracing::debug;

use super::env::Context;
use super::error::TypeError;
use super::scheme;
use super::subst::Substitution;
use super::supply::VarSupply;
use super::ty::{MonoType, PolyType};
use super::unify::unify;
use crate::ast::{ABSTRACTION, APPLICATION, Branch, Identifier, SyntaxNode};

/// Algorithm W over the abstraction/application syntax tree.
///
/// The engine owns its variable supply, so independent `Infer` values never
/// interfere with each other; reuse one `Infer` when results of several runs
/// have to live in the same context.
pub struct Infer {
    supply: VarSupply,
}

impl Infer {
    pub fn new() -> Self {
        Infer {
            supply: VarSupply::new(),
        }
    }

    pub fn with_supply(supply: VarSupply) -> Self {
        Infer { supply }
    }

    pub fn supply(&self) -> &VarSupply {
        &self.supply
    }

    pub fn instantiate(&mut self, poly: &PolyType) -> MonoType {
        scheme::instantiate(poly, &mut self.supply)
    }

    pub fn generalize(&self, env: &Context, ty: &MonoType) -> PolyType {
        scheme::generalize(env, ty)
    }

    pub fn infer(
        &mut self,
        env: &Context,
        expr: &SyntaxNode,
    ) -> Result<(Substitution, MonoType), TypeError> {
        let (subst, ty) = match expr {
            SyntaxNode::Leaf(ident) => self.infer_identifier(env, ident)?,
            SyntaxNode::Branch(branch) => match branch.kind.as_str() {
                ABSTRACTION => self.infer_abstraction(env, branch)?,
                APPLICATION => self.infer_application(env, branch)?,
                other => {
                    return Err(TypeError::malformed_expression(
                        format!("unknown node '{}'", other),
                        branch.position.clone(),
                    ));
                }
            },
        };
        debug!(expr = %expr, ty = %ty, "inferred");
        Ok((subst, ty))
    }

    /// Infer `expr` and return its type with every learned binding applied.
    pub fn infer_type(&mut self, env: &Context, expr: &SyntaxNode) -> Result<MonoType, TypeError> {
        let (subst, ty) = self.infer(env, expr)?;
        Ok(subst.apply(&ty))
    }

    /// Type `expr` and bind `name` to its generalized type.
    pub fn define(
        &mut self,
        env: &Context,
        name: impl Into<String>,
        expr: &SyntaxNode,
    ) -> Result<Context, TypeError> {
        let (subst, ty) = self.infer(env, expr)?;
        let env1 = subst.apply(env);
        let scheme = self.generalize(&env1, &ty);
        Ok(env1.extend(name, scheme))
    }

    fn infer_identifier(
        &mut self,
        env: &Context,
        ident: &Identifier,
    ) -> Result<(Substitution, MonoType), TypeError> {
        match env.lookup(&ident.value) {
            Some(scheme) => {
                let ty = self.instantiate(scheme);
                Ok((Substitution::empty(), ty))
            }
            None => Err(TypeError::unbound_variable(
                ident.value.clone(),
                ident.position.clone(),
            )),
        }
    }

    fn infer_abstraction(
        &mut self,
        env: &Context,
        branch: &Branch,
    ) -> Result<(Substitution, MonoType), TypeError> {
        let (param, body) = match branch.children.as_slice() {
            [SyntaxNode::Leaf(param), body] => (param, body),
            _ => {
                return Err(TypeError::malformed_expression(
                    "abstraction expects a parameter name and a body",
                    branch.position.clone(),
                ));
            }
        };

        let beta = MonoType::Var(self.supply.fresh());
        let env1 = env.extend(param.value.clone(), PolyType::Mono(beta.clone()));
        let (s1, t1) = self.infer(&env1, body)?;
        let ty = s1.apply(&MonoType::func(beta, t1));
        Ok((s1, ty))
    }

    fn infer_application(
        &mut self,
        env: &Context,
        branch: &Branch,
    ) -> Result<(Substitution, MonoType), TypeError> {
        let (left, right) = match branch.children.as_slice() {
            [left, right] => (left, right),
            _ => {
                return Err(TypeError::malformed_expression(
                    "application expects exactly two operands",
                    branch.position.clone(),
                ));
            }
        };

        let beta = MonoType::Var(self.supply.fresh());
        let (s1, t1) = self.infer(env, left)?;
        let env1 = s1.apply(env);
        let (s2, t2) = self.infer(&env1, right)?;

        let s3 = unify(&s2.apply(&t1), &MonoType::func(t2, beta.clone()))
            .map_err(|e| TypeError::from_unify_error(e, branch.position.clone()))?;

        let ty = s3.apply(&beta);
        let subst = s3.combine(&s2.combine(&s1));
        Ok((subst, ty))
    }
}

impl Default for Infer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> SyntaxNode {
        SyntaxNode::ident(name)
    }

    fn lambda(param: &str, body: SyntaxNode) -> SyntaxNode {
        SyntaxNode::abstraction(param, body)
    }

    fn call(func: SyntaxNode, arg: SyntaxNode) -> SyntaxNode {
        SyntaxNode::application(func, arg)
    }

    #[test]
    fn test_infer_unbound_variable() {
        let mut infer = Infer::new();
        let result = infer.infer(&Context::empty(), &ident("q"));
        match result {
            Err(TypeError::UnboundVariable { name, .. }) => assert_eq!(name, "q"),
            other => panic!("Expected UnboundVariable error, got: {:?}", other),
        }
    }

    #[test]
    fn test_infer_variable_monomorphic() {
        let mut infer = Infer::new();
        let env = Context::empty().extend("x", MonoType::Int.into());
        let result = infer.infer(&env, &ident("x"));
        assert_eq!(result, Ok((Substitution::empty(), MonoType::Int)));
    }

    #[test]
    fn test_infer_variable_instantiates_scheme() {
        let mut infer = Infer::new();
        let env = Context::empty().extend(
            "id",
            PolyType::forall(
                "a",
                PolyType::Mono(MonoType::func(MonoType::var("a"), MonoType::var("a"))),
            ),
        );
        let (_, ty) = infer.infer(&env, &ident("id")).unwrap();
        assert_eq!(ty.to_string(), "_a -> _a");
    }

    #[test]
    fn test_infer_identity_function() {
        let mut infer = Infer::new();
        let (_, ty) = infer
            .infer(&Context::empty(), &lambda("x", ident("x")))
            .unwrap();
        assert_eq!(ty.to_string(), "_a -> _a");
    }

    #[test]
    fn test_infer_const_function() {
        let mut infer = Infer::new();
        let expr = lambda("x", lambda("y", ident("x")));
        let (_, ty) = infer.infer(&Context::empty(), &expr).unwrap();
        assert_eq!(ty.to_string(), "_a -> _b -> _a");
    }

    #[test]
    fn test_infer_given_example() {
        let mut infer = Infer::new();
        let expr = call(lambda("x", call(ident("x"), ident("z"))), ident("y"));
        let (_, ty) = infer.infer(&Context::prelude(), &expr).unwrap();
        assert_eq!(ty, MonoType::Bool);
    }

    #[test]
    fn test_abstraction_does_not_leak_parameter() {
        let mut infer = Infer::new();
        let env = Context::empty().extend("f", MonoType::func(MonoType::Int, MonoType::Int).into());
        // (x.x) x: the right-hand x is not the lambda's parameter
        let expr = call(lambda("x", ident("x")), ident("x"));
        let result = infer.infer(&env, &expr);
        assert!(matches!(result, Err(TypeError::UnboundVariable { .. })));
    }

    #[test]
    fn test_infer_self_application_mismatch() {
        let mut infer = Infer::new();
        let env = Context::empty().extend("f", MonoType::func(MonoType::Int, MonoType::Bool).into());
        let result = infer.infer(&env, &call(ident("f"), ident("f")));
        assert_eq!(
            result,
            Err(TypeError::unification(
                MonoType::Int,
                MonoType::func(MonoType::Int, MonoType::Bool),
                lachs::Span::default(),
            ))
        );
    }

    #[test]
    fn test_infer_occurs_check() {
        let mut infer = Infer::new();
        let expr = lambda("x", call(ident("x"), ident("x")));
        let result = infer.infer(&Context::empty(), &expr);
        assert!(matches!(result, Err(TypeError::InfiniteType { .. })));
    }

    #[test]
    fn test_application_substitution_covers_all_steps() {
        let mut infer = Infer::new();
        let env = Context::empty()
            .extend("g", MonoType::var("g").into())
            .extend("n", MonoType::Int.into());
        // g n: g's type variable must be resolved by the final substitution
        let (subst, ty) = infer.infer(&env, &call(ident("g"), ident("n"))).unwrap();
        assert_eq!(
            subst.apply(&MonoType::var("g")),
            MonoType::func(MonoType::Int, ty)
        );
    }

    #[test]
    fn test_infer_type_applies_substitution() {
        let mut infer = Infer::new();
        let env = Context::prelude();
        let expr = lambda("f", call(ident("f"), ident("z")));
        let ty = infer.infer_type(&env, &expr).unwrap();
        assert_eq!(ty.to_string(), "Int -> _b -> _b");
    }

    #[test]
    fn test_define_generalizes() {
        let mut infer = Infer::new();
        let env = infer
            .define(&Context::prelude(), "id", &lambda("x", ident("x")))
            .unwrap();
        assert_eq!(env.lookup("id").unwrap().to_string(), "forall _a. _a -> _a");

        // id is usable at two different types
        let ty1 = infer.infer_type(&env, &call(ident("id"), ident("z"))).unwrap();
        let ty2 = infer.infer_type(&env, &call(ident("id"), ident("y"))).unwrap();
        assert_eq!(ty1, MonoType::Int);
        assert_eq!(ty2, MonoType::func(MonoType::Int, MonoType::Bool));
    }

    #[test]
    fn test_unknown_node_is_malformed() {
        let mut infer = Infer::new();
        let expr = SyntaxNode::branch("let", vec![ident("a"), ident("b")]);
        let result = infer.infer(&Context::empty(), &expr);
        assert!(matches!(result, Err(TypeError::MalformedExpression { .. })));
    }

    #[test]
    fn test_abstraction_with_non_leaf_param_is_malformed() {
        let mut infer = Infer::new();
        let expr = SyntaxNode::branch(
            ABSTRACTION,
            vec![call(ident("a"), ident("b")), ident("a")],
        );
        let result = infer.infer(&Context::empty(), &expr);
        assert!(matches!(result, Err(TypeError::MalformedExpression { .. })));
    }

    #[test]
    fn test_application_with_one_child_is_malformed() {
        let mut infer = Infer::new();
        let expr = SyntaxNode::branch(APPLICATION, vec![ident("a")]);
        let result = infer.infer(&Context::empty(), &expr);
        assert!(matches!(result, Err(TypeError::MalformedExpression { .. })));
    }

    #[test]
    fn test_separate_engines_start_fresh() {
        let expr = lambda("x", ident("x"));
        let (_, ty1) = Infer::new().infer(&Context::empty(), &expr).unwrap();
        let (_, ty2) = Infer::new().infer(&Context::empty(), &expr).unwrap();
        assert_eq!(ty1, ty2);
    }

    #[test]
    fn test_shared_engine_never_reuses_names() {
        let mut infer = Infer::new();
        let expr = lambda("x", ident("x"));
        let (_, ty1) = infer.infer(&Context::empty(), &expr).unwrap();
        let (_, ty2) = infer.infer(&Context::empty(), &expr).unwrap();
        assert_ne!(ty1, ty2);
        assert_eq!(infer.supply().issued(), 2);
    }
}
