//! Error types for fuzzy-set operations.

use thiserror::Error;

/// Errors raised by [`FuzzySet`](crate::FuzzySet) operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuzzyError {
    /// The operation needs a non-zero height or a non-zero total mass.
    ///
    /// Raised for empty and all-zero sets, where the formula would
    /// divide by zero.
    #[error("degenerate fuzzy set: {operation} requires a non-zero membership mass")]
    DegenerateSet {
        /// Name of the refused operation.
        operation: &'static str,
    },

    /// A [`FuzzyConfig`](crate::FuzzyConfig) failed validation.
    #[error("invalid fuzzy configuration: {0}")]
    InvalidConfig(String),
}

impl FuzzyError {
    pub(crate) fn degenerate(operation: &'static str) -> Self {
        tracing::warn!(operation, "refusing operation on degenerate fuzzy set");
        FuzzyError::DegenerateSet { operation }
    }
}

/// Result type for fuzzy-set operations.
pub type FuzzyResult<T> = Result<T, FuzzyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_message_names_operation() {
        let err = FuzzyError::degenerate("normalize");
        assert_eq!(err, FuzzyError::DegenerateSet { operation: "normalize" });
        assert_eq!(
            err.to_string(),
            "degenerate fuzzy set: normalize requires a non-zero membership mass"
        );
    }

    #[test]
    fn test_invalid_config_message() {
        let err = FuzzyError::InvalidConfig("tolerance must be finite".into());
        assert_eq!(
            err.to_string(),
            "invalid fuzzy configuration: tolerance must be finite"
        );
    }
}
