use super::ty::TypeVariable;

const LETTERS: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Source of fresh type variables.
///
/// Names run `_a` .. `_z`, then `_a1` .. `_z1`, `_a2` and so on. A supply
/// never hands out the same name twice, so two inference runs that must
/// not collide should share one supply (or continue via [`VarSupply::starting_at`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VarSupply {
    next: usize,
}

impl VarSupply {
    pub fn new() -> Self {
        VarSupply { next: 0 }
    }

    pub fn starting_at(next: usize) -> Self {
        VarSupply { next }
    }

    /// How many variables this supply has produced so far.
    pub fn issued(&self) -> usize {
        self.next
    }

    pub fn fresh(&mut self) -> TypeVariable {
        let counter = self.next;
        self.next += 1;
        TypeVariable::new(Self::name_for(counter))
    }

    fn name_for(counter: usize) -> String {
        let letter = LETTERS[counter % 26] as char;
        match counter / 26 {
            0 => format!("_{}", letter),
            round => format!("_{}{}", letter, round),
        }
    }
}
