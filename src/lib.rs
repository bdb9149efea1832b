//! # u-fuzzy
//!
//! Discrete fuzzy-set primitives for the U-Engine ecosystem.
//!
//! This crate computes descriptive measures, distances, set-theoretic
//! operations, and defuzzification values for fuzzy sets over a small,
//! explicitly enumerated universe of numeric points. It knows nothing about
//! rule bases, inference, or any consumer domain.
//!
//! ## Modules
//!
//! - [`set`] — The [`FuzzySet`] model: core, support, height, normalization,
//!   alpha-cuts, hedges, convexity, dominance
//! - [`distance`] — Positional Hamming and Euclidean distances
//! - [`entropy`] — Normalized Shannon entropy
//! - [`algebra`] — Max/min, algebraic, and bounded set operations
//! - [`defuzz`] — COG, COA, LOM, ROM, MOM defuzzification
//! - [`config`] — Entropy normalization and tie tolerance
//! - [`error`] — [`FuzzyError`] and [`FuzzyResult`]
//!
//! ## Design Philosophy
//!
//! - **Formulas applied literally**: degrees are not validated, so
//!   out-of-range input produces deterministic (if meaningless) output
//! - **Explicit degenerate cases**: division by a zero height or a zero
//!   mass is an error, never a silent NaN
//! - **Insertion order is significant**: results list points in the order
//!   the set was built, and distances pair degrees by position
//! - **Property-based testing**: algebraic laws verified via proptest
//!
//! ## Example
//!
//! ```
//! use u_fuzzy::FuzzySet;
//!
//! let a = FuzzySet::from_pairs([(1.0, 0.6), (2.0, 0.5), (9.0, 0.3), (8.0, 0.8), (4.0, 0.0)]);
//! let b = FuzzySet::from_pairs([(3.0, 0.5), (1.0, 1.0), (5.0, 0.0), (8.0, 1.0)]);
//!
//! assert_eq!(a.alpha_cut(0.5), vec![1.0, 2.0, 8.0]);
//! assert!((a.hamming_distance(&b) - 1.1).abs() < 1e-12);
//! assert_eq!(a.union_max(&b).len(), 2);
//! ```

pub mod algebra;
pub mod config;
pub mod defuzz;
pub mod distance;
pub mod entropy;
pub mod error;
pub mod set;
mod summation;

#[cfg(test)]
mod fixtures;

pub use algebra::Family;
pub use config::{EntropyNormalization, FuzzyConfig};
pub use error::{FuzzyError, FuzzyResult};
pub use set::{FuzzySet, Membership, Point};
