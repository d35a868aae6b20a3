//! Property-based tests for filtering and predicate algebra

use proptest::prelude::*;
use sift::predicate::*;
use sift::{count_matching, filter, partition};

fn limit_and_modulus() -> impl Strategy<Value = (i32, i32)> {
    (-50i32..50, 1i32..7)
}

proptest! {
    #[test]
    fn prop_filter_is_ordered_subsequence(
        items in prop::collection::vec(-100i32..100, 0..60),
        limit in -100i32..100
    ) {
        let result = filter(&items, &gt(limit));

        // walk the input once, matching result items by address
        let mut cursor = items.iter();
        for found in &result {
            prop_assert!(cursor.any(|candidate| std::ptr::eq(candidate, *found)));
        }
    }

    #[test]
    fn prop_filter_keeps_exactly_satisfying_items(
        items in prop::collection::vec(-100i32..100, 0..60),
        (limit, modulus) in limit_and_modulus()
    ) {
        let p = gt(limit).and(from_fn(move |x: &i32| x.rem_euclid(modulus) == 0));
        let result: Vec<i32> = filter(&items, &p).into_iter().copied().collect();
        let expected: Vec<i32> = items.iter().copied().filter(|x| p.is_satisfied(x)).collect();

        prop_assert_eq!(result.len(), count_matching(&items, &p));
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn prop_filter_is_idempotent(
        items in prop::collection::vec(-100i32..100, 0..60),
        limit in -100i32..100
    ) {
        let p = lt(limit);
        let once: Vec<i32> = filter(&items, &p).into_iter().copied().collect();
        let twice: Vec<i32> = filter(&once, &p).into_iter().copied().collect();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_partition_is_complementary(
        items in prop::collection::vec(-100i32..100, 0..60),
        limit in -100i32..100
    ) {
        let p = ge(limit);
        let (matched, rejected) = partition(&items, &p);

        prop_assert_eq!(matched.len() + rejected.len(), items.len());
        prop_assert_eq!(&matched, &filter(&items, &p));
        prop_assert_eq!(&rejected, &filter(&items, &p.not()));
    }

    #[test]
    fn prop_and_is_idempotent(x in any::<i32>(), limit in any::<i32>()) {
        let p = gt(limit);
        prop_assert_eq!((&p).and(&p).is_satisfied(&x), p.is_satisfied(&x));
    }

    #[test]
    fn prop_and_is_commutative(x in any::<i32>(), a in any::<i32>(), m in 1i32..10) {
        let p = gt(a);
        let q = from_fn(move |v: &i32| v.rem_euclid(m) == 0);
        prop_assert_eq!(
            (&p).and(&q).is_satisfied(&x),
            (&q).and(&p).is_satisfied(&x)
        );
    }

    #[test]
    fn prop_de_morgan(x in any::<i32>(), a in any::<i32>(), b in any::<i32>()) {
        let p = gt(a);
        let q = lt(b);
        prop_assert_eq!(
            (&p).and(&q).not().is_satisfied(&x),
            (&p).not().or((&q).not()).is_satisfied(&x)
        );
        prop_assert_eq!(
            (&p).or(&q).not().is_satisfied(&x),
            (&p).not().and((&q).not()).is_satisfied(&x)
        );
    }

    #[test]
    fn prop_boxed_matches_static(x in any::<i32>(), a in any::<i32>(), b in any::<i32>()) {
        let static_form = gt(a).and(lt(b));
        let boxed_form = all_boxed(vec![gt(a).boxed(), lt(b).boxed()]);
        prop_assert_eq!(static_form.is_satisfied(&x), boxed_form.is_satisfied(&x));
    }

    #[test]
    fn prop_empty_input_yields_empty(limit in any::<i32>()) {
        let items: Vec<i32> = Vec::new();
        prop_assert!(filter(&items, &gt(limit)).is_empty());
    }
}
