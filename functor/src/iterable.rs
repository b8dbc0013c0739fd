//! Lazy sequences and the functor over them.

use std::rc::Rc;

use crate::{Functor, FunctorCast, Morphism};

/// A lazily produced sequence of `X`, possibly infinite.
pub type Seq<'a, X> = Box<dyn Iterator<Item = X> + 'a>;

/// Box any iterable into a [`Seq`].
pub fn seq<'a, I>(iter: I) -> Seq<'a, I::Item>
where
    I: IntoIterator,
    I::IntoIter: 'a,
{
    Box::new(iter.into_iter())
}

/// The functor behind `Iterator::map`: lifting `f` yields a morphism that applies `f` to each
/// element of a sequence, lazily and in order.
///
/// ```rust
/// # use functor::{seq, Functor, IterableFunctor};
/// let mapped = IterableFunctor::map(|x: u64| x * x, seq(1..));
///
/// assert_eq!(mapped.take(4).collect::<Vec<_>>(), vec![1, 4, 9, 16]);
/// ```
#[derive(Clone, Debug)]
pub enum IterableFunctor {}

impl FunctorCast for IterableFunctor {
    type Cast<'a, X: 'a> = Seq<'a, X>;
}

impl Functor for IterableFunctor {
    fn lift<'a, X: 'a, Y: 'a>(
        f: impl Morphism<X, Y> + 'a,
    ) -> impl Morphism<Self::Cast<'a, X>, Self::Cast<'a, Y>> + 'a {
        // shared between every sequence the lifted morphism produces
        let f = Rc::new(f);
        move |input: Seq<'a, X>| -> Seq<'a, Y> {
            let f = Rc::clone(&f);
            Box::new(input.map(move |x| (*f)(x)))
        }
    }
}
