use std::cell::Cell;

use functor::{compose, identity, laws, Functor, Maybe, MaybeFunctor};
use proptest::prelude::*;

use crate::strategies::{arb_maybe, arb_op};

proptest! {
    #[test]
    fn identity_law(a in arb_maybe()) {
        prop_assert_eq!(laws::check_identity::<MaybeFunctor, _, _>(|| a, identity), Ok(()));
    }

    #[test]
    fn composition_law(a in arb_maybe(), f in arb_op(), g in arb_op()) {
        prop_assert_eq!(
            laws::check_composition::<MaybeFunctor, _, _, _, _>(f.morphism(), g.morphism(), || a, identity),
            Ok(())
        );
    }

    #[test]
    fn composition_law_across_types(a in arb_maybe(), g in arb_op()) {
        let show = |x: i64| x.to_string();
        prop_assert_eq!(
            laws::check_composition::<MaybeFunctor, _, _, _, _>(show, g.morphism(), || a, identity),
            Ok(())
        );
    }

    #[test]
    fn derived_map(a in arb_maybe(), f in arb_op()) {
        prop_assert_eq!(
            laws::check_derived_map::<MaybeFunctor, _, _, _>(f.morphism(), || a, identity),
            Ok(())
        );
    }

    #[test]
    fn short_circuit(f in arb_op()) {
        prop_assert_eq!(laws::check_short_circuit(f.morphism()), Ok(()));
    }

    #[test]
    fn agrees_with_option_map(a in arb_maybe(), f in arb_op(), g in arb_op()) {
        let expected = a.into_option().map(|x| f.apply(g.apply(x)));
        let mapped = MaybeFunctor::map(compose(f.morphism(), g.morphism()), a);
        prop_assert_eq!(mapped.into_option(), expected);
    }

    #[test]
    fn morphism_called_once_per_present_value(a in arb_maybe(), f in arb_op()) {
        let calls = Cell::new(0);
        let counted = |x: i64| {
            calls.set(calls.get() + 1);
            f.apply(x)
        };

        let mapped = MaybeFunctor::map(counted, a);
        prop_assert_eq!(mapped.is_present(), a.is_present());
        prop_assert_eq!(calls.get(), usize::from(a.is_present()));
    }
}

#[test]
fn concrete_cases() {
    let f = |x: i32| x + 1;
    let g = |x: i32| x * 2;

    assert_eq!(MaybeFunctor::map(f, Maybe::new(1)), Maybe::new(2));
    assert_eq!(MaybeFunctor::map(f, Maybe::absent()), Maybe::absent());
    assert_eq!(MaybeFunctor::map(compose(f, g), Maybe::new(1)), Maybe::new(3));
    assert_eq!(
        compose(MaybeFunctor::lift(f), MaybeFunctor::lift(g))(Maybe::new(1)),
        Maybe::new(3)
    );
}
