//! Positional distances between fuzzy sets.
//!
//! Distances compare the two degree sequences **by position** in insertion
//! order, not by point. The i-th degree of one set is paired with the i-th
//! degree of the other, whatever their points are. When one sequence is
//! longer, each of its leftover degrees is added to the accumulator as-is,
//! i.e. as its distance to an implicit zero. For the Euclidean distance the
//! leftovers are added before the square root **without** being squared.
//!
//! [`RaggedPairs`] is the pairing contract both distances are built on.

use crate::set::FuzzySet;
use crate::summation::kahan_sum;

/// One step of a positional walk over two degree sequences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Pairing {
    /// Both sequences still had a value at this position.
    Both(f64, f64),
    /// Only the longer sequence had a value at this position.
    Tail(f64),
}

/// Iterator pairing two sequences positionally, then yielding the
/// unmatched tail of the longer one.
///
/// # Examples
/// ```
/// use u_fuzzy::distance::{ragged_pairs, Pairing};
///
/// let steps: Vec<_> = ragged_pairs([0.1, 0.2], [0.3]).collect();
/// assert_eq!(steps, vec![Pairing::Both(0.1, 0.3), Pairing::Tail(0.2)]);
/// ```
#[derive(Debug, Clone)]
pub struct RaggedPairs<A, B> {
    left: std::iter::Fuse<A>,
    right: std::iter::Fuse<B>,
}

/// Pairs `left` and `right` positionally.
pub fn ragged_pairs<A, B>(left: A, right: B) -> RaggedPairs<A::IntoIter, B::IntoIter>
where
    A: IntoIterator<Item = f64>,
    B: IntoIterator<Item = f64>,
{
    RaggedPairs {
        left: left.into_iter().fuse(),
        right: right.into_iter().fuse(),
    }
}

impl<A, B> Iterator for RaggedPairs<A, B>
where
    A: Iterator<Item = f64>,
    B: Iterator<Item = f64>,
{
    type Item = Pairing;

    fn next(&mut self) -> Option<Pairing> {
        match (self.left.next(), self.right.next()) {
            (Some(a), Some(b)) => Some(Pairing::Both(a, b)),
            (Some(x), None) | (None, Some(x)) => Some(Pairing::Tail(x)),
            (None, None) => None,
        }
    }
}

impl FuzzySet {
    /// Hamming distance: `Σ|aᵢ − bᵢ|` over positionally paired degrees,
    /// plus every unmatched degree of the longer set.
    ///
    /// # Examples
    /// ```
    /// use u_fuzzy::FuzzySet;
    ///
    /// let a = FuzzySet::from_pairs([(1.0, 0.1), (2.0, 0.5), (9.0, 1.0), (8.0, 0.0)]);
    /// let b = FuzzySet::from_pairs([(1.0, 0.0), (2.0, 0.2), (9.0, 1.0), (8.0, 0.7)]);
    /// assert!((a.hamming_distance(&b) - 1.1).abs() < 1e-12);
    /// ```
    pub fn hamming_distance(&self, other: &FuzzySet) -> f64 {
        kahan_sum(
            ragged_pairs(self.degrees(), other.degrees()).map(|step| match step {
                Pairing::Both(a, b) => (a - b).abs(),
                Pairing::Tail(x) => x,
            }),
        )
    }

    /// Euclidean distance: `sqrt(Σ(aᵢ − bᵢ)² + Σ tail)` over positionally
    /// paired degrees. Unmatched degrees enter the sum unsquared.
    pub fn euclidean_distance(&self, other: &FuzzySet) -> f64 {
        kahan_sum(
            ragged_pairs(self.degrees(), other.degrees()).map(|step| match step {
                Pairing::Both(a, b) => (a - b) * (a - b),
                Pairing::Tail(x) => x,
            }),
        )
        .sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{first, second};
    use approx::assert_abs_diff_eq;

    // --- pairing ---

    #[test]
    fn test_ragged_pairs_left_longer() {
        let steps: Vec<_> = ragged_pairs([1.0, 2.0, 3.0], [4.0]).collect();
        assert_eq!(
            steps,
            vec![
                Pairing::Both(1.0, 4.0),
                Pairing::Tail(2.0),
                Pairing::Tail(3.0)
            ]
        );
    }

    #[test]
    fn test_ragged_pairs_right_longer() {
        let steps: Vec<_> = ragged_pairs([0.0_f64; 0], [0.5, 0.25]).collect();
        assert_eq!(steps, vec![Pairing::Tail(0.5), Pairing::Tail(0.25)]);
    }

    #[test]
    fn test_ragged_pairs_empty() {
        assert_eq!(ragged_pairs([0.0_f64; 0], [0.0_f64; 0]).count(), 0);
    }

    // --- hamming ---

    #[test]
    fn test_hamming_fixtures() {
        assert_abs_diff_eq!(first().hamming_distance(&second()), 1.1, epsilon = 1e-12);
    }

    #[test]
    fn test_hamming_pairs_by_position_not_point() {
        let a = FuzzySet::from_pairs([(1.0, 0.2), (2.0, 0.9)]);
        let b = FuzzySet::from_pairs([(2.0, 0.9), (1.0, 0.2)]);
        assert_abs_diff_eq!(a.hamming_distance(&b), 1.4, epsilon = 1e-12);
    }

    #[test]
    fn test_hamming_same_set_is_zero() {
        assert_eq!(first().hamming_distance(&first()), 0.0);
    }

    // --- euclidean ---

    #[test]
    fn test_euclidean_fixtures() {
        let d = first().euclidean_distance(&second());
        assert_abs_diff_eq!(d, 0.39_f64.sqrt(), epsilon = 1e-12);
        assert!((d - 0.624).abs() < 0.01);
    }

    #[test]
    fn test_euclidean_tail_is_not_squared() {
        let a = FuzzySet::from_pairs([
            (1.0, 0.0),
            (2.0, 0.8),
            (9.0, 0.3),
            (3.0, 0.6),
            (8.0, 0.9),
            (14.0, 1.0),
        ]);
        let b = FuzzySet::from_pairs([(1.0, 0.0), (2.0, 0.2), (9.0, 0.6), (3.0, 0.1), (8.0, 1.0)]);
        let d = a.euclidean_distance(&b);
        assert_abs_diff_eq!(d, 1.71_f64.sqrt(), epsilon = 1e-12);
        assert!((d - 1.307).abs() < 0.01);
    }

    #[test]
    fn test_euclidean_tail_asymmetry() {
        // A tail of 0.25 adds 0.25 under the root, not 0.0625.
        let a = FuzzySet::from_pairs([(1.0, 0.25)]);
        assert_abs_diff_eq!(a.euclidean_distance(&FuzzySet::default()), 0.5, epsilon = 1e-12);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::fixtures::arb_set;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn distances_are_symmetric(a in arb_set(0, 10), b in arb_set(0, 10)) {
            prop_assert!((a.hamming_distance(&b) - b.hamming_distance(&a)).abs() < 1e-12);
            prop_assert!((a.euclidean_distance(&b) - b.euclidean_distance(&a)).abs() < 1e-12);
        }

        #[test]
        fn distances_are_non_negative(a in arb_set(0, 10), b in arb_set(0, 10)) {
            prop_assert!(a.hamming_distance(&b) >= 0.0);
            prop_assert!(a.euclidean_distance(&b) >= 0.0);
        }

        #[test]
        fn pairing_length_is_longest(a in arb_set(0, 10), b in arb_set(0, 10)) {
            let steps = ragged_pairs(a.degrees(), b.degrees()).count();
            prop_assert_eq!(steps, a.len().max(b.len()));
        }
    }
}
