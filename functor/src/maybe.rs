//! An optional value and the functor over it.

use crate::{Functor, FunctorCast, Morphism, PartiallyApplied};

/// A value that is either present or absent. Defaults to absent.
///
/// Two `Maybe`s are equal iff both are absent or both are present with equal values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Maybe<T> {
    value: Option<T>,
}

/// Lifts morphisms into morphisms over [`Maybe`], skipping absent values.
///
/// ```rust
/// # use functor::{Functor, Maybe, MaybeFunctor};
/// let add_one = |x: i32| x + 1;
///
/// assert_eq!(MaybeFunctor::map(add_one, Maybe::new(1)), Maybe::new(2));
/// assert_eq!(MaybeFunctor::map(add_one, Maybe::absent()), Maybe::absent());
/// ```
pub type MaybeFunctor = Maybe<PartiallyApplied>;

impl<T> Maybe<T> {
    pub fn new(value: T) -> Self {
        Self { value: Some(value) }
    }

    pub fn absent() -> Self {
        Self { value: None }
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn into_option(self) -> Option<T> {
        self.value
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::absent()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self { value }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(maybe: Maybe<T>) -> Self {
        maybe.value
    }
}

impl FunctorCast for Maybe<PartiallyApplied> {
    type Cast<'a, X: 'a> = Maybe<X>;
}

impl Functor for Maybe<PartiallyApplied> {
    // absent input short-circuits, `f` is never called
    fn lift<'a, X: 'a, Y: 'a>(
        f: impl Morphism<X, Y> + 'a,
    ) -> impl Morphism<Self::Cast<'a, X>, Self::Cast<'a, Y>> + 'a {
        move |a: Maybe<X>| match a.value {
            Some(x) => Maybe::new(f(x)),
            None => Maybe::absent(),
        }
    }
}
