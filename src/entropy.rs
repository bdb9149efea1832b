//! Normalized Shannon entropy of a fuzzy set.
//!
//! # Formula
//! ```text
//! pᵢ = μᵢ / Σμ
//! H  = −Σ pᵢ·log₂(pᵢ) / log₂(N)      (terms with pᵢ = 0 skipped)
//! ```
//!
//! `N` comes from [`EntropyNormalization`]. The default is a fixed `N = 6`,
//! the universe size of the classical coursework exercises, and it is kept
//! for every set size. Use [`EntropyNormalization::UniverseSize`] to divide by
//! the set's own size instead.

use crate::config::EntropyNormalization;
use crate::error::{FuzzyError, FuzzyResult};
use crate::set::FuzzySet;
use crate::summation::kahan_sum;

impl FuzzySet {
    /// Shannon entropy (base 2) of the sum-normalized degree distribution,
    /// divided by the configured normalization constant.
    ///
    /// # Errors
    /// - [`FuzzyError::InvalidConfig`] if the configuration is invalid.
    /// - [`FuzzyError::DegenerateSet`] if the degrees sum to `0.0`.
    ///
    /// # Examples
    /// ```
    /// use u_fuzzy::FuzzySet;
    ///
    /// let set = FuzzySet::from_pairs([(1.0, 0.6), (2.0, 0.5), (9.0, 0.3), (8.0, 0.8), (4.0, 0.0)]);
    /// let h = set.entropy().unwrap();
    /// assert!((h - 0.7426).abs() < 1e-4);
    /// ```
    pub fn entropy(&self) -> FuzzyResult<f64> {
        self.config().validate()?;
        let total = kahan_sum(self.degrees());
        if total == 0.0 {
            return Err(FuzzyError::degenerate("entropy"));
        }
        let raw = -kahan_sum(
            self.degrees()
                .map(|mu| mu / total)
                .filter(|&p| p != 0.0)
                .map(|p| p * p.log2()),
        );
        let universe = match self.config().entropy_normalization {
            EntropyNormalization::Fixed(n) => n,
            EntropyNormalization::UniverseSize => {
                if self.len() < 2 {
                    return Ok(0.0);
                }
                self.len()
            }
        };
        Ok(raw / (universe as f64).log2())
    }
}
