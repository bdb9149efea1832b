//! Binary set operations over fuzzy sets.
//!
//! Every operation is evaluated point-wise on the points the two sets have
//! in common, in this set's insertion order. Points present in only one set
//! are dropped; shared points whose result is `0.0` are kept.
//!
//! # Operator families
//!
//! | Family | Union (A ∪ B) | Intersection (A ∩ B) | Difference (A ∖ B) |
//! |---|---|---|---|
//! | [`Family::MaxMin`] | max(a, b) | min(a, b) | min(a, 1 − b) |
//! | [`Family::Algebraic`] | a + b − ab | ab | a(1 − b) |
//! | [`Family::Bounded`] | min(1, a + b) | max(0, a + b − 1) | max(0, a − b) |
//!
//! Both symmetric differences are built from the family's own operators:
//!
//! ```text
//! A △₁ B = (A ∖ B) ∪ (B ∖ A)
//! A △₂ B = (A ∪ B) ∖ (A ∩ B)
//! ```

use tracing::trace;

use crate::set::{FuzzySet, Membership};

/// A consistent choice of union, intersection and difference operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    /// Zadeh's max/min operators.
    MaxMin,
    /// Probabilistic sum and algebraic product.
    Algebraic,
    /// Łukasiewicz bounded sum and bounded difference.
    Bounded,
}

impl Family {
    /// t-conorm of the family.
    pub fn union(self, a: f64, b: f64) -> f64 {
        match self {
            Family::MaxMin => a.max(b),
            Family::Algebraic => a + b - a * b,
            Family::Bounded => (a + b).min(1.0),
        }
    }

    /// t-norm of the family.
    pub fn intersection(self, a: f64, b: f64) -> f64 {
        match self {
            Family::MaxMin => a.min(b),
            Family::Algebraic => a * b,
            Family::Bounded => (a + b - 1.0).max(0.0),
        }
    }

    /// Difference `a ∖ b`, i.e. `a` intersected with the complement of `b`.
    pub fn deduct(self, a: f64, b: f64) -> f64 {
        match self {
            Family::MaxMin => a.min(1.0 - b),
            Family::Algebraic => a * (1.0 - b),
            Family::Bounded => (a - b).max(0.0),
        }
    }

    /// `(a ∖ b) ∪ (b ∖ a)`.
    pub fn symmetric_deduction1(self, a: f64, b: f64) -> f64 {
        self.union(self.deduct(a, b), self.deduct(b, a))
    }

    /// `(a ∪ b) ∖ (a ∩ b)`.
    pub fn symmetric_deduction2(self, a: f64, b: f64) -> f64 {
        self.deduct(self.union(a, b), self.intersection(a, b))
    }
}

impl FuzzySet {
    /// Applies `op` to the degrees of every point shared with `other`.
    ///
    /// # Examples
    /// ```
    /// use u_fuzzy::FuzzySet;
    ///
    /// let a = FuzzySet::from_pairs([(1.0, 0.6), (2.0, 0.5), (8.0, 0.8)]);
    /// let b = FuzzySet::from_pairs([(8.0, 1.0), (3.0, 0.5), (1.0, 1.0)]);
    /// let avg = a.combine(&b, |x, y| (x + y) / 2.0);
    /// assert_eq!(avg.len(), 2);
    /// assert_eq!(avg.keys().map(|x| x.into_inner()).collect::<Vec<_>>(), vec![1.0, 8.0]);
    /// ```
    pub fn combine(&self, other: &FuzzySet, op: impl Fn(f64, f64) -> f64) -> Membership {
        let combined: Membership = self
            .membership()
            .iter()
            .filter_map(|(x, &a)| other.membership().get(x).map(|&b| (*x, op(a, b))))
            .collect();
        trace!(
            left = self.len(),
            right = other.len(),
            shared = combined.len(),
            "combined fuzzy sets"
        );
        combined
    }

    /// Union under `family`, restricted to shared points.
    pub fn union(&self, other: &FuzzySet, family: Family) -> Membership {
        self.combine(other, |a, b| family.union(a, b))
    }

    /// Intersection under `family`, restricted to shared points.
    pub fn intersection(&self, other: &FuzzySet, family: Family) -> Membership {
        self.combine(other, |a, b| family.intersection(a, b))
    }

    /// Difference `self ∖ other` under `family`, restricted to shared points.
    pub fn deduct(&self, other: &FuzzySet, family: Family) -> Membership {
        self.combine(other, |a, b| family.deduct(a, b))
    }

    /// `(A ∖ B) ∪ (B ∖ A)` under `family`, restricted to shared points.
    pub fn symmetric_deduction1(&self, other: &FuzzySet, family: Family) -> Membership {
        self.combine(other, |a, b| family.symmetric_deduction1(a, b))
    }

    /// `(A ∪ B) ∖ (A ∩ B)` under `family`, restricted to shared points.
    pub fn symmetric_deduction2(&self, other: &FuzzySet, family: Family) -> Membership {
        self.combine(other, |a, b| family.symmetric_deduction2(a, b))
    }

    // --- max/min ---

    /// `max(a, b)` on shared points.
    pub fn union_max(&self, other: &FuzzySet) -> Membership {
        self.union(other, Family::MaxMin)
    }

    /// `min(a, b)` on shared points.
    pub fn intersection_max(&self, other: &FuzzySet) -> Membership {
        self.intersection(other, Family::MaxMin)
    }

    /// `min(a, 1 − b)` on shared points.
    pub fn deduct_max(&self, other: &FuzzySet) -> Membership {
        self.deduct(other, Family::MaxMin)
    }

    /// `(A ∖ B) ∪ (B ∖ A)` on shared points.
    pub fn symmetric_deduction1_max(&self, other: &FuzzySet) -> Membership {
        self.symmetric_deduction1(other, Family::MaxMin)
    }

    /// `(A ∪ B) ∖ (A ∩ B)` on shared points.
    pub fn symmetric_deduction2_max(&self, other: &FuzzySet) -> Membership {
        self.symmetric_deduction2(other, Family::MaxMin)
    }

    // --- algebraic ---

    /// `a + b − ab` on shared points.
    pub fn union_alg(&self, other: &FuzzySet) -> Membership {
        self.union(other, Family::Algebraic)
    }

    /// `ab` on shared points.
    pub fn intersection_alg(&self, other: &FuzzySet) -> Membership {
        self.intersection(other, Family::Algebraic)
    }

    /// `a(1 − b)` on shared points.
    pub fn deduct_alg(&self, other: &FuzzySet) -> Membership {
        self.deduct(other, Family::Algebraic)
    }

    /// `(A ∖ B) ∪ (B ∖ A)` on shared points.
    pub fn symmetric_deduction1_alg(&self, other: &FuzzySet) -> Membership {
        self.symmetric_deduction1(other, Family::Algebraic)
    }

    /// `(A ∪ B) ∖ (A ∩ B)` on shared points.
    pub fn symmetric_deduction2_alg(&self, other: &FuzzySet) -> Membership {
        self.symmetric_deduction2(other, Family::Algebraic)
    }

    // --- bounded ---

    /// `min(1, a + b)` on shared points.
    pub fn union_lim(&self, other: &FuzzySet) -> Membership {
        self.union(other, Family::Bounded)
    }

    /// `max(0, a + b − 1)` on shared points.
    pub fn intersection_lim(&self, other: &FuzzySet) -> Membership {
        self.intersection(other, Family::Bounded)
    }

    /// `max(0, a − b)` on shared points.
    pub fn deduct_lim(&self, other: &FuzzySet) -> Membership {
        self.deduct(other, Family::Bounded)
    }

    /// `(A ∖ B) ∪ (B ∖ A)` on shared points.
    pub fn symmetric_deduction1_lim(&self, other: &FuzzySet) -> Membership {
        self.symmetric_deduction1(other, Family::Bounded)
    }

    /// `(A ∪ B) ∖ (A ∩ B)` on shared points.
    pub fn symmetric_deduction2_lim(&self, other: &FuzzySet) -> Membership {
        self.symmetric_deduction2(other, Family::Bounded)
    }
}
