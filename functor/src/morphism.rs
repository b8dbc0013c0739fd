//! Morphisms: pure functions from one object to another.

/// A mapping from a value of type `X` to a value of type `Y`.
///
/// Anything callable as `Fn(X) -> Y` is a morphism: closures, fn items and fn pointers alike.
/// Morphisms are assumed to be pure, calling one twice with the same input is expected to
/// yield the same output. Nothing here enforces that.
///
/// ```rust
/// # use functor::Morphism;
/// fn apply_twice<X>(f: impl Morphism<X, X>, x: X) -> X {
///     f(f(x))
/// }
///
/// assert_eq!(apply_twice(|x: i32| x + 3, 1), 7);
/// ```
pub trait Morphism<X, Y>: Fn(X) -> Y {}

impl<X, Y, F> Morphism<X, Y> for F where F: Fn(X) -> Y {}

/// Typed witness for the identity morphism on `X`.
///
/// `identity` coerces to it, eg `let id: Identity<i32> = identity;`
pub type Identity<X> = fn(X) -> X;

/// Returns its input unchanged.
pub fn identity<X>(x: X) -> X {
    x
}

/// Compose two morphisms in mathematical order, `f ∘ g`.
///
/// The result applies `g` first and then `f`, so `compose(f, g)(x) == f(g(x))`.
/// This is not pipeline order.
///
/// ```rust
/// # use functor::compose;
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
///
/// assert_eq!(compose(add_one, double)(1), 3);
/// assert_eq!(compose(double, add_one)(1), 4);
/// ```
pub fn compose<X, Y, Z>(f: impl Morphism<Y, Z>, g: impl Morphism<X, Y>) -> impl Morphism<X, Z> {
    move |x: X| f(g(x))
}
