//! Tunable behaviour of a [`FuzzySet`](crate::FuzzySet).
//!
//! The defaults reproduce the classical coursework formulas exactly,
//! including the fixed six-point entropy normalization.

use crate::error::{FuzzyError, FuzzyResult};

/// Divisor applied to the raw Shannon entropy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntropyNormalization {
    /// Divide by `log2(n)` for a fixed universe size `n`, regardless of
    /// how many points the set actually has.
    Fixed(usize),
    /// Divide by `log2(|points|)` of the set being measured.
    UniverseSize,
}

impl Default for EntropyNormalization {
    fn default() -> Self {
        EntropyNormalization::Fixed(6)
    }
}

/// Configuration for fuzzy-set calculations.
///
/// # Examples
/// ```
/// use u_fuzzy::{EntropyNormalization, FuzzyConfig};
///
/// let config = FuzzyConfig::default().with_entropy_normalization(EntropyNormalization::UniverseSize);
/// assert!(config.validate().is_ok());
/// assert!(FuzzyConfig::default().with_tolerance(-1.0).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyConfig {
    /// Entropy divisor policy.
    pub entropy_normalization: EntropyNormalization,
    /// Relative tolerance (scaled by total mass) under which two masses
    /// are treated as tied in center-of-area defuzzification.
    pub tolerance: f64,
}

impl Default for FuzzyConfig {
    fn default() -> Self {
        FuzzyConfig {
            entropy_normalization: EntropyNormalization::default(),
            tolerance: f64::EPSILON,
        }
    }
}

impl FuzzyConfig {
    /// Configuration whose entropy is normalized by the set's own size.
    pub fn universe_normalized() -> Self {
        FuzzyConfig {
            entropy_normalization: EntropyNormalization::UniverseSize,
            ..FuzzyConfig::default()
        }
    }

    /// Set the entropy normalization policy.
    pub fn with_entropy_normalization(mut self, normalization: EntropyNormalization) -> Self {
        self.entropy_normalization = normalization;
        self
    }

    /// Set the tie tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Validate the configuration.
    ///
    /// # Errors
    /// Returns [`FuzzyError::InvalidConfig`] if a fixed entropy universe has
    /// fewer than 2 points or the tolerance is negative or not finite.
    pub fn validate(&self) -> FuzzyResult<()> {
        if let EntropyNormalization::Fixed(n) = self.entropy_normalization {
            if n < 2 {
                return Err(FuzzyError::InvalidConfig(format!(
                    "fixed entropy universe needs at least 2 points, got {n}"
                )));
            }
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(FuzzyError::InvalidConfig(format!(
                "tolerance must be finite and non-negative, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reproduces_six_point_entropy() {
        let config = FuzzyConfig::default();
        assert_eq!(config.entropy_normalization, EntropyNormalization::Fixed(6));
        assert_eq!(config.tolerance, f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_universe_normalized() {
        let config = FuzzyConfig::universe_normalized();
        assert_eq!(
            config.entropy_normalization,
            EntropyNormalization::UniverseSize
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_tiny_fixed_universe() {
        for n in [0, 1] {
            let config =
                FuzzyConfig::default().with_entropy_normalization(EntropyNormalization::Fixed(n));
            assert!(matches!(
                config.validate(),
                Err(FuzzyError::InvalidConfig(_))
            ));
        }
    }

    #[test]
    fn test_validate_rejects_bad_tolerance() {
        for tol in [-1e-9, f64::NAN, f64::INFINITY] {
            let config = FuzzyConfig::default().with_tolerance(tol);
            assert!(config.validate().is_err(), "tolerance {tol} accepted");
        }
        assert!(FuzzyConfig::default().with_tolerance(0.0).validate().is_ok());
    }
}
