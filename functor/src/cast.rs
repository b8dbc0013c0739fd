/// A type-level mapping from some type `X` to its wrapped counterpart `Cast<X>`.
///
/// # Implementing this trait
///
/// Rust does not allow implementing a trait for a partially applied type. We can implement a
/// trait for `Option<usize>` but not for just `Option`. The convention used in this crate is to
/// implement it for the container applied to the uninhabited [`PartiallyApplied`] marker, eg
/// `Maybe<PartiallyApplied>` is the token whose `Cast<X>` is `Maybe<X>`.
///
/// Containers that are not a single concrete type (like lazy iterators) get their own
/// uninhabited marker instead.
///
/// The `'a` parameter bounds any borrowed data in the wrapped type. Casts that borrow nothing
/// simply ignore it.
///
/// ```rust
/// # use functor::{Cast, FunctorCast, PartiallyApplied};
/// struct Pair<A>(A, A);
///
/// impl FunctorCast for Pair<PartiallyApplied> {
///     type Cast<'a, X: 'a> = Pair<X>;
/// }
///
/// let pair: Cast<'_, Pair<PartiallyApplied>, u8> = Pair(1, 2);
/// assert_eq!(pair.0 + pair.1, 3);
/// ```
pub trait FunctorCast {
    /// the wrapped type produced for `X`
    type Cast<'a, X: 'a>: 'a;
}

/// Shorthand for the wrapped type `F` associates with `X`.
pub type Cast<'a, F, X> = <F as FunctorCast>::Cast<'a, X>;

/// An uninhabited type used to name partially-applied containers, see [`FunctorCast`].
#[derive(Clone, Debug)]
pub enum PartiallyApplied {}
