use std::cell::Cell;

use functor::{identity, laws, seq, Functor, IterableFunctor, Seq};
use proptest::prelude::*;

use crate::strategies::{arb_items, arb_op};

fn collect<T>(s: Seq<'_, T>) -> Vec<T> {
    s.collect()
}

proptest! {
    #[test]
    fn identity_law(items in arb_items()) {
        prop_assert_eq!(
            laws::check_identity::<IterableFunctor, _, _>(|| seq(items.clone()), collect),
            Ok(())
        );
    }

    #[test]
    fn composition_law(items in arb_items(), f in arb_op(), g in arb_op()) {
        prop_assert_eq!(
            laws::check_composition::<IterableFunctor, _, _, _, _>(
                f.morphism(),
                g.morphism(),
                || seq(items.clone()),
                collect,
            ),
            Ok(())
        );
    }

    #[test]
    fn derived_map(items in arb_items(), f in arb_op()) {
        prop_assert_eq!(
            laws::check_derived_map::<IterableFunctor, _, _, _>(f.morphism(), || seq(items.clone()), collect),
            Ok(())
        );
    }

    #[test]
    fn elementwise(items in arb_items(), f in arb_op()) {
        prop_assert_eq!(laws::check_elementwise(f.morphism(), &items), Ok(()));
    }

    #[test]
    fn length_is_preserved(items in arb_items(), f in arb_op()) {
        let mapped = IterableFunctor::map(f.morphism(), seq(items.clone()));
        prop_assert_eq!(mapped.count(), items.len());
    }

    #[test]
    fn infinite_input_is_consumed_lazily(n in 0usize..32, f in arb_op()) {
        let calls = Cell::new(0);
        let counted = |x: i64| {
            calls.set(calls.get() + 1);
            f.apply(x)
        };

        let prefix: Vec<i64> = IterableFunctor::map(counted, seq(0..)).take(n).collect();
        let expected: Vec<i64> = (0..).map(|x| f.apply(x)).take(n).collect();

        prop_assert_eq!(prefix, expected);
        prop_assert_eq!(calls.get(), n);
    }
}

#[test]
fn concrete_case() {
    let f = |x: i32| x + 1;

    let native: Vec<i32> = (0..10).map(f).collect();
    let lifted: Vec<i32> = IterableFunctor::map(f, seq(0..10)).collect();

    assert_eq!(lifted, native);
    assert_eq!(lifted, (1..=10).collect::<Vec<_>>());
}

#[test]
fn identity_on_strings() {
    let words = || seq(["a", "bc", ""].map(String::from));
    let mapped: Vec<String> = IterableFunctor::map(identity, words()).collect();

    assert_eq!(mapped, collect(words()));
}
