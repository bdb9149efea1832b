//! Defuzzification: reducing a fuzzy set to one representative point.
//!
//! | Method | Result |
//! |---|---|
//! | COG | Σ(x·μ) / Σμ |
//! | COA | first point, by ascending value, whose cumulative mass exceeds the mass to its right |
//! | LOM | smallest point attaining the height |
//! | ROM | largest point attaining the height |
//! | MOM | mean of the points attaining the height |
//!
//! All methods refuse sets with no mass (empty or all-zero) with
//! [`FuzzyError::DegenerateSet`].

use crate::error::{FuzzyError, FuzzyResult};
use crate::set::FuzzySet;
use crate::summation::{kahan_sum, CompensatedSum};

impl FuzzySet {
    /// Center of gravity: `Σ(x·μ) / Σμ`.
    ///
    /// # Examples
    /// ```
    /// use u_fuzzy::FuzzySet;
    ///
    /// let set = FuzzySet::from_pairs([(1.0, 0.6), (2.0, 0.5), (9.0, 0.3), (8.0, 0.8), (4.0, 0.0)]);
    /// let cog = set.defuzzification_cog().unwrap();
    /// assert!((cog - 4.863636363636363).abs() < 1e-12);
    /// ```
    pub fn defuzzification_cog(&self) -> FuzzyResult<f64> {
        let mass = kahan_sum(self.degrees());
        if mass == 0.0 {
            return Err(FuzzyError::degenerate("defuzzification_cog"));
        }
        let moment = kahan_sum(
            self.membership()
                .iter()
                .map(|(x, &mu)| x.into_inner() * mu),
        );
        Ok(moment / mass)
    }

    /// Center of area.
    ///
    /// Walks the points in ascending order and returns the first one whose
    /// cumulative mass (itself included) exceeds the mass of the points
    /// strictly to its right by more than `tolerance × Σμ`. A point whose
    /// two sides are tied is skipped in favour of the next one, so a
    /// symmetric pair such as `{1: 0.5, 2: 0.5}` yields the right point, 2.
    ///
    /// # Complexity
    /// Time: O(n log n) (dominated by the sort), Space: O(n)
    ///
    /// # Errors
    /// - [`FuzzyError::InvalidConfig`] if the configuration is invalid.
    /// - [`FuzzyError::DegenerateSet`] if no point satisfies the split,
    ///   which happens exactly when the set has no positive mass.
    ///
    /// # Examples
    /// ```
    /// use u_fuzzy::FuzzySet;
    ///
    /// let pair = FuzzySet::from_pairs([(1.0, 0.5), (2.0, 0.5)]);
    /// assert_eq!(pair.defuzzification_coa().unwrap(), 2.0);
    /// ```
    pub fn defuzzification_coa(&self) -> FuzzyResult<f64> {
        self.config().validate()?;
        let mut sorted: Vec<(f64, f64)> = self.points().zip(self.degrees()).collect();
        sorted.sort_by(|a, b| a.0.total_cmp(&b.0));

        let total = kahan_sum(sorted.iter().map(|&(_, mu)| mu));
        if total > 0.0 {
            let tolerance = self.config().tolerance * total;
            let mut left = CompensatedSum::default();
            for &(x, mu) in &sorted {
                left.add(mu);
                let right = total - left.value();
                if left.value() - right > tolerance {
                    return Ok(x);
                }
            }
        }
        Err(FuzzyError::degenerate("defuzzification_coa"))
    }

    /// Smallest point whose degree equals the height.
    pub fn defuzzification_lom(&self) -> FuzzyResult<f64> {
        let maxima = self.maxima("defuzzification_lom")?;
        Ok(maxima.into_iter().fold(f64::INFINITY, f64::min))
    }

    /// Largest point whose degree equals the height.
    pub fn defuzzification_rom(&self) -> FuzzyResult<f64> {
        let maxima = self.maxima("defuzzification_rom")?;
        Ok(maxima.into_iter().fold(f64::NEG_INFINITY, f64::max))
    }

    /// Mean of the points whose degree equals the height.
    pub fn defuzzification_mom(&self) -> FuzzyResult<f64> {
        let maxima = self.maxima("defuzzification_mom")?;
        let n = maxima.len() as f64;
        Ok(kahan_sum(maxima) / n)
    }

    /// Points attaining a positive height, in point order.
    fn maxima(&self, operation: &'static str) -> FuzzyResult<Vec<f64>> {
        let height = self.height();
        if height <= 0.0 {
            return Err(FuzzyError::degenerate(operation));
        }
        Ok(self.alpha_cut(height))
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
        fn results_lie_within_universe(set in arb_set(1, 12)) {
            prop_assume!(set.height() > 0.0);
            let lo = set.points().fold(f64::INFINITY, f64::min);
            let hi = set.points().fold(f64::NEG_INFINITY, f64::max);
            for value in [
                set.defuzzification_cog().unwrap(),
                set.defuzzification_coa().unwrap(),
                set.defuzzification_lom().unwrap(),
                set.defuzzification_rom().unwrap(),
                set.defuzzification_mom().unwrap(),
            ] {
                prop_assert!(value >= lo - 1e-9 && value <= hi + 1e-9, "{} outside [{}, {}]", value, lo, hi);
            }
        }

        #[test]
        fn lom_mom_rom_are_ordered(set in arb_set(1, 12)) {
            prop_assume!(set.height() > 0.0);
            let lom = set.defuzzification_lom().unwrap();
            let mom = set.defuzzification_mom().unwrap();
            let rom = set.defuzzification_rom().unwrap();
            prop_assert!(lom <= mom + 1e-9 && mom <= rom + 1e-9);
        }
    }
}
