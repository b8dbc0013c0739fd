//! Morphisms, functors over them and checks for the functor laws.
//!
//! A [`Functor`] lifts a morphism `X -> Y` into a morphism `Cast<X> -> Cast<Y>`, where the
//! [`FunctorCast`] of the functor names the wrapped type. Two instances are provided:
//! [`MaybeFunctor`] over optional values and [`IterableFunctor`] over lazy sequences.
//!
//! ```rust
//! use functor::{compose, seq, Functor, IterableFunctor, Maybe, MaybeFunctor};
//!
//! let add_one = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//!
//! assert_eq!(MaybeFunctor::map(compose(add_one, double), Maybe::new(1)), Maybe::new(3));
//!
//! let lifted = IterableFunctor::lift(add_one);
//! assert_eq!(lifted(seq(0..3)).collect::<Vec<_>>(), vec![1, 2, 3]);
//! ```
mod cast;
mod functor;
mod iterable;
pub mod laws;
mod maybe;
mod morphism;

pub use crate::cast::{Cast, FunctorCast, PartiallyApplied};
pub use crate::functor::{Compose, Functor};
pub use crate::iterable::{seq, IterableFunctor, Seq};
pub use crate::laws::{verify, Law, LawViolation};
pub use crate::maybe::{Maybe, MaybeFunctor};
pub use crate::morphism::{compose, identity, Identity, Morphism};
