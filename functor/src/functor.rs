use std::marker::PhantomData;

use crate::{FunctorCast, Morphism};

/// A structure-preserving mapping between two categories: every morphism `X -> Y` is lifted
/// into a morphism `Cast<X> -> Cast<Y>`.
///
/// # Implementing this trait
///
/// Only [`Functor::lift`] is implemented per instance. [`Functor::map`] is derived from it and
/// must not be overridden, so that mapping and lifting can never disagree.
///
/// ```rust
/// # use functor::{Functor, FunctorCast, Morphism, PartiallyApplied};
/// #[derive(Debug, PartialEq, Eq)]
/// struct Pair<A>(A, A);
///
/// impl FunctorCast for Pair<PartiallyApplied> {
///     type Cast<'a, X: 'a> = Pair<X>;
/// }
///
/// impl Functor for Pair<PartiallyApplied> {
///     fn lift<'a, X: 'a, Y: 'a>(
///         f: impl Morphism<X, Y> + 'a,
///     ) -> impl Morphism<Self::Cast<'a, X>, Self::Cast<'a, Y>> + 'a {
///         move |Pair(l, r): Pair<X>| Pair(f(l), f(r))
///     }
/// }
///
/// let doubled = Pair::<PartiallyApplied>::map(|n: i32| n * 2, Pair(1, 2));
/// assert_eq!(doubled, Pair(2, 4));
/// ```
///
/// Every instance is expected to obey the functor laws, see [`crate::laws`]:
/// * identity: `map(identity, a) == a`
/// * composition: `map(compose(f, g), a) == compose(lift(f), lift(g))(a)`
pub trait Functor: FunctorCast {
    /// Associate a morphism on plain values with a morphism on wrapped values.
    fn lift<'a, X: 'a, Y: 'a>(
        f: impl Morphism<X, Y> + 'a,
    ) -> impl Morphism<Self::Cast<'a, X>, Self::Cast<'a, Y>> + 'a;

    /// Apply the lifted morphism to a wrapped value.
    fn map<'a, X: 'a, Y: 'a>(f: impl Morphism<X, Y> + 'a, a: Self::Cast<'a, X>) -> Self::Cast<'a, Y> {
        Self::lift(f)(a)
    }
}

/// The composite of two functors, wrapping with `F2` first and then with `F1`.
///
/// `Compose<MaybeFunctor, IterableFunctor>` casts `X` to `Maybe<Seq<X>>`.
pub struct Compose<F1, F2>(PhantomData<F1>, PhantomData<F2>);

impl<F1: FunctorCast, F2: FunctorCast> FunctorCast for Compose<F1, F2> {
    type Cast<'a, X: 'a> = F1::Cast<'a, F2::Cast<'a, X>>;
}

impl<F1: Functor, F2: Functor> Functor for Compose<F1, F2> {
    fn lift<'a, X: 'a, Y: 'a>(
        f: impl Morphism<X, Y> + 'a,
    ) -> impl Morphism<Self::Cast<'a, X>, Self::Cast<'a, Y>> + 'a {
        F1::lift(F2::lift(f))
    }
}
