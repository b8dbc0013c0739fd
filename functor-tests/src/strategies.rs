use functor::{Maybe, Morphism};
use proptest::prelude::*;

/// Arithmetic on `i64` that can be generated, shrunk and printed, unlike a bare closure.
///
/// All operations wrap on overflow so every generated morphism is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Add(i64),
    Mul(i64),
    Neg,
    Square,
}

impl Op {
    pub fn apply(self, x: i64) -> i64 {
        match self {
            Op::Add(n) => x.wrapping_add(n),
            Op::Mul(n) => x.wrapping_mul(n),
            Op::Neg => x.wrapping_neg(),
            Op::Square => x.wrapping_mul(x),
        }
    }

    pub fn morphism(self) -> impl Morphism<i64, i64> + Copy {
        move |x: i64| self.apply(x)
    }
}

pub fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i64>().prop_map(Op::Add),
        any::<i64>().prop_map(Op::Mul),
        Just(Op::Neg),
        Just(Op::Square),
    ]
}

pub fn arb_maybe() -> impl Strategy<Value = Maybe<i64>> {
    any::<Option<i64>>().prop_map(Maybe::from)
}

pub fn arb_items() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(any::<i64>(), 0..64)
}
