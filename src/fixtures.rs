//! Shared test fixtures.

use proptest::prelude::*;

use crate::set::FuzzySet;

/// `{1: 0.6, 2: 0.5, 9: 0.3, 8: 0.8, 4: 0.0}`: subnormal, no core.
pub(crate) fn first() -> FuzzySet {
    FuzzySet::from_pairs([(1.0, 0.6), (2.0, 0.5), (9.0, 0.3), (8.0, 0.8), (4.0, 0.0)])
}

/// `{3: 0.5, 1: 1.0, 5: 0.0, 8: 1.0}`: normal, core `[1, 8]`.
pub(crate) fn second() -> FuzzySet {
    FuzzySet::from_pairs([(3.0, 0.5), (1.0, 1.0), (5.0, 0.0), (8.0, 1.0)])
}

/// Sets of `min_len..=max_len` distinct integer points with degrees in
/// `[0, 1]`, inserted in random order.
pub(crate) fn arb_set(min_len: usize, max_len: usize) -> impl Strategy<Value = FuzzySet> {
    proptest::collection::btree_map(-50_i32..50, 0.0_f64..=1.0, min_len..=max_len)
        .prop_map(|map| map.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|entries| {
            entries
                .into_iter()
                .map(|(x, mu)| (f64::from(x), mu))
                .collect::<FuzzySet>()
        })
}
