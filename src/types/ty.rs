use std::fmt;

/// A named type variable. Two variables are the same iff their names match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeVariable {
    pub name: String,
}

impl TypeVariable {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for TypeVariable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Tag of a type constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeFunction {
    Int,
    Bool,
    Function,
    List,
}

impl TypeFunction {
    pub fn arity(self) -> usize {
        match self {
            TypeFunction::Int | TypeFunction::Bool => 0,
            TypeFunction::List => 1,
            TypeFunction::Function => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TypeFunction::Int => "Int",
            TypeFunction::Bool => "Bool",
            TypeFunction::Function => "->",
            TypeFunction::List => "List",
        }
    }
}

/// A type without quantifiers. Every constructor carries exactly as many
/// arguments as its tag's arity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonoType {
    Var(TypeVariable),
    Int,
    Bool,
    Function(Box<MonoType>, Box<MonoType>),
    List(Box<MonoType>),
}

impl MonoType {
    pub fn var(name: impl Into<String>) -> Self {
        MonoType::Var(TypeVariable::new(name))
    }

    pub fn func(param: MonoType, body: MonoType) -> Self {
        MonoType::Function(Box::new(param), Box::new(body))
    }

    pub fn list(elem: MonoType) -> Self {
        MonoType::List(Box::new(elem))
    }

    /// The constructor tag, or `None` for a type variable.
    pub fn constructor(&self) -> Option<TypeFunction> {
        match self {
            MonoType::Var(_) => None,
            MonoType::Int => Some(TypeFunction::Int),
            MonoType::Bool => Some(TypeFunction::Bool),
            MonoType::Function(_, _) => Some(TypeFunction::Function),
            MonoType::List(_) => Some(TypeFunction::List),
        }
    }

    /// Constructor arguments, left to right.
    pub fn arguments(&self) -> Vec<&MonoType> {
        match self {
            MonoType::Var(_) | MonoType::Int | MonoType::Bool => Vec::new(),
            MonoType::Function(param, body) => vec![&**param, &**body],
            MonoType::List(elem) => vec![&**elem],
        }
    }

    /// Rebuild this type with `f` applied to every constructor argument.
    /// Variables are returned unchanged.
    pub fn map_arguments(&self, mut f: impl FnMut(&MonoType) -> MonoType) -> MonoType {
        match self {
            MonoType::Var(_) | MonoType::Int | MonoType::Bool => self.clone(),
            MonoType::Function(param, body) => MonoType::func(f(param), f(body)),
            MonoType::List(elem) => MonoType::list(f(elem)),
        }
    }

    /// Names of the type variables occurring in this type, in traversal
    /// order. Duplicates are kept.
    pub fn free_variables(&self) -> Vec<String> {
        match self {
            MonoType::Var(v) => vec![v.name.clone()],
            _ => self
                .arguments()
                .into_iter()
                .flat_map(|arg| arg.free_variables())
                .collect(),
        }
    }

    pub fn occurs(&self, var: &TypeVariable) -> bool {
        match self {
            MonoType::Var(v) => v == var,
            _ => self.arguments().into_iter().any(|arg| arg.occurs(var)),
        }
    }

    pub fn pretty(&self) -> String {
        match self {
            MonoType::Var(v) => v.name.clone(),
            MonoType::Function(param, body) => format!("{} -> {}", param.pretty(), body.pretty()),
            _ => {
                let mut parts = vec![self.constructor().map_or("", TypeFunction::name).to_string()];
                parts.extend(self.arguments().into_iter().map(MonoType::pretty));
                parts.join(" ")
            }
        }
    }
}

impl fmt::Display for MonoType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeQuantifier {
    pub param: String,
    pub body: Box<PolyType>,
}

/// A type scheme: a monotype under zero or more `forall` binders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolyType {
    Mono(MonoType),
    Quantifier(TypeQuantifier),
}

impl PolyType {
    pub fn forall(param: impl Into<String>, body: PolyType) -> Self {
        PolyType::Quantifier(TypeQuantifier {
            param: param.into(),
            body: Box::new(body),
        })
    }

    /// Free variables of the scheme: the body's, minus each binder's name.
    pub fn free_variables(&self) -> Vec<String> {
        match self {
            PolyType::Mono(mono) => mono.free_variables(),
            PolyType::Quantifier(q) => q
                .body
                .free_variables()
                .into_iter()
                .filter(|v| *v != q.param)
                .collect(),
        }
    }

    pub fn pretty(&self) -> String {
        match self {
            PolyType::Mono(mono) => mono.pretty(),
            PolyType::Quantifier(q) => format!("forall {}. {}", q.param, q.body.pretty()),
        }
    }
}

impl From<MonoType> for PolyType {
    fn from(mono: MonoType) -> Self {
        PolyType::Mono(mono)
    }
}

impl fmt::Display for PolyType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}
