use proptest::prelude::*;
use seqflow::prelude::*;
use seqflow::testing::Counted;
use seqflow::Nested::{Leaf, List};

fn elements() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..64)
}

fn tree() -> impl Strategy<Value = Nested<u8>> {
    any::<u8>()
        .prop_map(Leaf)
        .prop_recursive(5, 64, 6, |inner| prop::collection::vec(inner, 0..6).prop_map(List))
}

fn leaves(node: &Nested<u8>, out: &mut Vec<u8>) {
    match node {
        Leaf(value) => out.push(*value),
        List(children) => {
            for child in children {
                leaves(child, out);
            }
        }
    }
}

proptest! {
    #[test]
    fn map_agrees_with_elementwise_application(xs in elements()) {
        let f = |n: i32| n.wrapping_mul(3).wrapping_sub(1);
        let lazy = xs.by_ref().map(f).gather::<Vec<_>>().unwrap();
        let expected: Vec<i32> = xs.iter().copied().map(f).collect();
        prop_assert_eq!(lazy, expected);
    }

    #[test]
    fn filter_keeps_exactly_the_matches_in_order(xs in elements(), modulus in 1i32..7) {
        let kept = xs.by_ref().filter(|n| n.rem_euclid(modulus) == 0).gather::<Vec<_>>().unwrap();
        let expected: Vec<i32> = xs.iter().copied().filter(|n| n.rem_euclid(modulus) == 0).collect();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn take_yields_a_prefix_and_pulls_no_further(xs in elements(), n in 0usize..80) {
        let source = Counted::new(xs.clone());
        let taken = source.by_ref().take(n).gather::<Vec<_>>().unwrap();

        prop_assert_eq!(&taken[..], &xs[..n.min(xs.len())]);
        let expected_pulls = if n <= xs.len() { n } else { xs.len() + 1 };
        prop_assert_eq!(source.pulls(), expected_pulls);
    }

    #[test]
    fn take_bounds_an_infinite_source(n in 0usize..200) {
        let naturals = iterate(0usize, |k| k + 1);
        let taken = naturals.take(n).gather::<Vec<_>>().unwrap();
        prop_assert_eq!(taken, (0..n).collect::<Vec<_>>());
    }

    #[test]
    fn first_of_filter_pulls_up_to_the_first_match(xs in elements()) {
        let source = Counted::new(xs.clone());
        let found = source.by_ref().filter(|n| n % 5 == 0).first().unwrap();

        let position = xs.iter().position(|n| n % 5 == 0);
        prop_assert_eq!(found, position.map(|i| xs[i]));
        prop_assert_eq!(source.pulls(), position.map_or(xs.len() + 1, |i| i + 1));
    }

    #[test]
    fn exhaustion_is_idempotent(xs in elements(), extra in 1usize..10) {
        let view = xs.by_ref().rest().filter(|n| n % 2 != 0).map(|n| n / 2);
        let mut cursor = view.cursor();
        while cursor.advance().unwrap().is_yielded() {}
        for _ in 0..extra {
            prop_assert!(cursor.advance().unwrap().is_complete());
        }
    }

    #[test]
    fn stateful_running_sum_matches_prefix_sums(xs in prop::collection::vec(-1000i64..1000, 0..64)) {
        let sums = xs.by_ref().stateful_map(0i64, |sum, n| (sum + n, sum + n));
        let expected: Vec<i64> = xs
            .iter()
            .scan(0i64, |sum, n| {
                *sum += n;
                Some(*sum)
            })
            .collect();

        prop_assert_eq!(sums.gather::<Vec<_>>().unwrap(), expected.clone());
        // a second traversal starts from the seed again
        prop_assert_eq!(sums.gather::<Vec<_>>().unwrap(), expected);
    }

    #[test]
    fn gathered_copy_survives_source_mutation(mut xs in elements(), fill in any::<i32>()) {
        let snapshot = xs.by_ref().map(|n| n ^ 1).gather::<Vec<_>>().unwrap();
        let before: Vec<i32> = xs.iter().map(|n| n ^ 1).collect();

        xs.iter_mut().for_each(|n| *n = fill);
        xs.push(fill);

        prop_assert_eq!(snapshot, before);
    }

    #[test]
    fn nested_flattens_to_its_leaves(root in tree()) {
        let mut expected = Vec::new();
        leaves(&root, &mut expected);
        prop_assert_eq!(root.gather::<Vec<_>>().unwrap(), expected);
    }

    #[test]
    fn generator_replays_its_input(xs in elements()) {
        let source = &xs;
        let replay = generator(|co| async move { co.emit_all(source.cursor()).await });

        prop_assert_eq!(replay.gather::<Vec<_>>().unwrap(), xs.clone());
        prop_assert_eq!(replay.count().unwrap(), xs.len());
    }
}
