//! Checks for the functor laws.
//!
//! Every check takes a `sample` closure producing a fresh wrapped value (wrapped values like
//! lazy sequences can only be consumed once) and an `observe` closure turning a wrapped value
//! into something comparable. Each check returns the first [`LawViolation`] it finds.
//!
//! ```rust
//! # use functor::{identity, laws, Maybe, MaybeFunctor};
//! laws::check_identity::<MaybeFunctor, _, _>(|| Maybe::new("x"), identity).unwrap();
//! ```
use std::any::{type_name, TypeId};
use std::cell::Cell;
use std::fmt::{self, Debug};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    compose, identity, seq, Cast, Compose, Functor, FunctorCast, IterableFunctor, Maybe,
    MaybeFunctor, Morphism, Seq,
};

/// The property a [`LawViolation`] is about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Law {
    /// the cast of a type is not the expected wrapped type
    Cast,
    /// `map(identity, a) != a`
    Identity,
    /// `map(compose(f, g), a) != compose(lift(f), lift(g))(a)`
    Composition,
    /// `map(f, a) != lift(f)(a)`
    DerivedMap,
    /// mapping over an absent value produced a value or called the morphism
    ShortCircuit,
    /// lifted sequence mapping disagrees with `Iterator::map`
    ElementWise,
    /// a known input did not map to its known output
    Expected,
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Law::Cast => write!(f, "cast"),
            Law::Identity => write!(f, "identity"),
            Law::Composition => write!(f, "composition"),
            Law::DerivedMap => write!(f, "derived map"),
            Law::ShortCircuit => write!(f, "short-circuit"),
            Law::ElementWise => write!(f, "element-wise"),
            Law::Expected => write!(f, "expected value"),
        }
    }
}

/// A functor instance failed one of its laws.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{law} law violated by `{functor}`: expected {expected}, got {actual}")]
pub struct LawViolation {
    pub law: Law,
    /// type name of the offending functor
    pub functor: &'static str,
    pub expected: String,
    pub actual: String,
}

fn violated(law: Law, functor: &'static str, expected: String, actual: String) -> LawViolation {
    warn!(functor, %law, %expected, %actual, "law violated");
    LawViolation {
        law,
        functor,
        expected,
        actual,
    }
}

fn holds<O: PartialEq + Debug>(
    law: Law,
    functor: &'static str,
    expected: O,
    actual: O,
) -> Result<(), LawViolation> {
    if expected == actual {
        debug!(functor, %law, "law holds");
        Ok(())
    } else {
        Err(violated(
            law,
            functor,
            format!("{expected:?}"),
            format!("{actual:?}"),
        ))
    }
}

/// Check that `F` casts `X` to `Expected`.
pub fn check_cast<F, X, Expected>() -> Result<(), LawViolation>
where
    F: FunctorCast,
    X: 'static,
    Expected: 'static,
{
    let functor = type_name::<F>();
    if TypeId::of::<Cast<'static, F, X>>() == TypeId::of::<Expected>() {
        debug!(functor, law = %Law::Cast, "law holds");
        Ok(())
    } else {
        Err(violated(
            Law::Cast,
            functor,
            type_name::<Expected>().to_string(),
            type_name::<Cast<'static, F, X>>().to_string(),
        ))
    }
}

/// Check `map(identity, a) == identity(a)`.
pub fn check_identity<'a, F, X, O>(
    sample: impl Fn() -> Cast<'a, F, X>,
    observe: impl Fn(Cast<'a, F, X>) -> O,
) -> Result<(), LawViolation>
where
    F: Functor,
    X: 'a,
    O: PartialEq + Debug,
{
    let expected = observe(identity(sample()));
    let actual = observe(F::map(identity::<X>, sample()));
    holds(Law::Identity, type_name::<F>(), expected, actual)
}

/// Check `map(compose(f, g), a) == compose(lift(f), lift(g))(a)`.
pub fn check_composition<'a, F, X, Y, Z, O>(
    f: impl Morphism<Y, Z> + Clone + 'a,
    g: impl Morphism<X, Y> + Clone + 'a,
    sample: impl Fn() -> Cast<'a, F, X>,
    observe: impl Fn(Cast<'a, F, Z>) -> O,
) -> Result<(), LawViolation>
where
    F: Functor,
    X: 'a,
    Y: 'a,
    Z: 'a,
    O: PartialEq + Debug,
{
    let mapped = observe(F::map(compose(f.clone(), g.clone()), sample()));
    let lifted = observe(compose(F::lift(f), F::lift(g))(sample()));
    holds(Law::Composition, type_name::<F>(), mapped, lifted)
}

/// Check that `map(f, a)` agrees with `lift(f)(a)`.
pub fn check_derived_map<'a, F, X, Y, O>(
    f: impl Morphism<X, Y> + Clone + 'a,
    sample: impl Fn() -> Cast<'a, F, X>,
    observe: impl Fn(Cast<'a, F, Y>) -> O,
) -> Result<(), LawViolation>
where
    F: Functor,
    X: 'a,
    Y: 'a,
    O: PartialEq + Debug,
{
    let lifted = observe(F::lift(f.clone())(sample()));
    let mapped = observe(F::map(f, sample()));
    holds(Law::DerivedMap, type_name::<F>(), lifted, mapped)
}

/// Check that mapping `f` over an absent [`Maybe`] yields absent without calling `f`.
pub fn check_short_circuit<X, Y>(f: impl Morphism<X, Y>) -> Result<(), LawViolation>
where
    Y: PartialEq + Debug,
{
    let functor = type_name::<MaybeFunctor>();
    let calls = Cell::new(0usize);
    let counted = |x: X| {
        calls.set(calls.get() + 1);
        f(x)
    };

    let mapped = MaybeFunctor::map(counted, Maybe::absent());
    holds(Law::ShortCircuit, functor, Maybe::absent(), mapped)?;
    holds(Law::ShortCircuit, functor, 0, calls.get())
}

/// Check that lifting `f` over `items` yields what `Iterator::map` yields, in order.
pub fn check_elementwise<X, Y>(f: impl Morphism<X, Y>, items: &[X]) -> Result<(), LawViolation>
where
    X: Clone,
    Y: PartialEq + Debug,
{
    let native: Vec<Y> = items.iter().cloned().map(&f).collect();
    let lifted: Vec<Y> = IterableFunctor::map(f, seq(items.iter().cloned())).collect();
    holds(
        Law::ElementWise,
        type_name::<IterableFunctor>(),
        native,
        lifted,
    )
}

/// Run every law check against the [`MaybeFunctor`], the [`IterableFunctor`] and their
/// composite, stopping at the first violation.
pub fn verify() -> Result<(), LawViolation> {
    let f = |x: i32| x + 1;
    let g = |x: i32| x * 2;

    check_cast::<MaybeFunctor, i32, Maybe<i32>>()?;
    check_cast::<IterableFunctor, i32, Seq<'static, i32>>()?;
    check_cast::<Compose<MaybeFunctor, IterableFunctor>, i32, Maybe<Seq<'static, i32>>>()?;

    let maybe = type_name::<MaybeFunctor>();
    holds(Law::Expected, maybe, Maybe::new(2), MaybeFunctor::map(f, Maybe::new(1)))?;
    holds(Law::Expected, maybe, Maybe::absent(), MaybeFunctor::map(f, Maybe::absent()))?;
    holds(
        Law::Expected,
        maybe,
        Maybe::new(3),
        MaybeFunctor::map(compose(f, g), Maybe::new(1)),
    )?;

    for sample in [Maybe::new(1), Maybe::absent()] {
        check_identity::<MaybeFunctor, _, _>(|| sample, identity)?;
        check_composition::<MaybeFunctor, _, _, _, _>(f, g, || sample, identity)?;
        check_derived_map::<MaybeFunctor, _, _, _>(f, || sample, identity)?;
    }
    check_short_circuit(f)?;

    let range = || seq(0..10);
    let collect = |s: Seq<'_, i32>| s.collect::<Vec<_>>();
    holds(
        Law::Expected,
        type_name::<IterableFunctor>(),
        (1..=10).collect::<Vec<_>>(),
        collect(IterableFunctor::map(f, range())),
    )?;
    check_identity::<IterableFunctor, _, _>(range, collect)?;
    check_composition::<IterableFunctor, _, _, _, _>(f, g, range, collect)?;
    check_derived_map::<IterableFunctor, _, _, _>(f, range, collect)?;
    check_elementwise(f, &(0..10).collect::<Vec<_>>())?;

    let nested = || Maybe::new(seq(0..10));
    let flatten = |m: Maybe<Seq<'_, i32>>| m.into_option().map(|s| s.collect::<Vec<_>>());
    check_identity::<Compose<MaybeFunctor, IterableFunctor>, _, _>(nested, flatten)?;
    check_composition::<Compose<MaybeFunctor, IterableFunctor>, _, _, _, _>(
        f, g, nested, flatten,
    )?;
    check_derived_map::<Compose<MaybeFunctor, IterableFunctor>, _, _, _>(f, nested, flatten)?;

    info!("functor laws hold");
    Ok(())
}
