//! The discrete fuzzy set and its single-set queries.
//!
//! A [`FuzzySet`] owns an insertion-ordered mapping from points of a finite
//! universe to membership degrees. Degrees are expected in `[0, 1]` but are
//! not validated; every formula applies literally to whatever is supplied.
//!
//! # Caching
//!
//! `core`, `transition_point`, `height` and `support` are computed on first
//! access and memoized. [`FuzzySet::normalize`] is the only mutating
//! operation: it rewrites the degrees in place, pins the cached height to
//! `1.0` and clears every other cache so later queries see the new degrees.

use std::cell::OnceCell;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use tracing::{debug, trace};

use crate::config::FuzzyConfig;
use crate::error::{FuzzyError, FuzzyResult};

/// A point of the universe of discourse.
pub type Point = OrderedFloat<f64>;

/// Insertion-ordered mapping from point to membership degree.
pub type Membership = IndexMap<Point, f64>;

/// Degree of the points forming the core.
const CORE_DEGREE: f64 = 1.0;

/// Degree of the transition (crossover) points.
const TRANSITION_DEGREE: f64 = 0.5;

/// A discrete fuzzy set over a finite, explicitly enumerated universe.
///
/// # Examples
/// ```
/// use u_fuzzy::FuzzySet;
///
/// let set = FuzzySet::from_pairs([(1.0, 0.6), (2.0, 0.5), (9.0, 0.3), (8.0, 0.8), (4.0, 0.0)]);
/// assert_eq!(set.height(), 0.8);
/// assert_eq!(set.support(), &[1.0, 2.0, 9.0, 8.0]);
/// assert_eq!(set.transition_point(), &[2.0]);
/// assert!(set.core().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct FuzzySet {
    membership: Membership,
    config: FuzzyConfig,
    core: OnceCell<Vec<f64>>,
    transition_point: OnceCell<Vec<f64>>,
    height: OnceCell<f64>,
    support: OnceCell<Vec<f64>>,
}

impl FuzzySet {
    /// Wraps `membership` with the default configuration.
    pub fn new(membership: Membership) -> Self {
        Self::with_config(membership, FuzzyConfig::default())
    }

    /// Wraps `membership` with an explicit configuration.
    ///
    /// The configuration is validated by the operations that depend on it,
    /// so construction never fails.
    pub fn with_config(membership: Membership, config: FuzzyConfig) -> Self {
        Self {
            membership,
            config,
            core: OnceCell::new(),
            transition_point: OnceCell::new(),
            height: OnceCell::new(),
            support: OnceCell::new(),
        }
    }

    /// Builds a set from `(point, degree)` pairs in iteration order.
    ///
    /// A repeated point keeps its first position and takes the last degree.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(x, mu)| (OrderedFloat(x), mu))
                .collect(),
        )
    }

    /// Returns the underlying mapping.
    pub fn membership(&self) -> &Membership {
        &self.membership
    }

    /// Consumes the set and returns the underlying mapping.
    pub fn into_membership(self) -> Membership {
        self.membership
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &FuzzyConfig {
        &self.config
    }

    /// Number of points in the universe.
    pub fn len(&self) -> usize {
        self.membership.len()
    }

    /// Returns `true` if the universe has no points.
    pub fn is_empty(&self) -> bool {
        self.membership.is_empty()
    }

    /// Points of the universe in insertion order.
    pub fn points(&self) -> impl ExactSizeIterator<Item = f64> + DoubleEndedIterator + '_ {
        self.membership.keys().map(|x| x.into_inner())
    }

    /// Membership degrees in insertion order.
    pub fn degrees(&self) -> impl ExactSizeIterator<Item = f64> + DoubleEndedIterator + '_ {
        self.membership.values().copied()
    }

    /// Degree of `point`, or `None` if it is not part of the universe.
    pub fn degree(&self, point: f64) -> Option<f64> {
        self.membership.get(&OrderedFloat(point)).copied()
    }

    fn points_where(&self, predicate: impl Fn(f64) -> bool) -> Vec<f64> {
        self.membership
            .iter()
            .filter(|(_, &mu)| predicate(mu))
            .map(|(x, _)| x.into_inner())
            .collect()
    }

    /// Applies `f` to every degree, keeping points and order.
    pub(crate) fn map_degrees(&self, f: impl Fn(f64) -> f64) -> Membership {
        self.membership.iter().map(|(&x, &mu)| (x, f(mu))).collect()
    }

    // ---------------------------------------------------------------------
    // Cached queries
    // ---------------------------------------------------------------------

    /// Points whose degree is exactly `1.0`, in point order.
    pub fn core(&self) -> &[f64] {
        self.core.get_or_init(|| {
            trace!("computing core");
            self.points_where(|mu| mu == CORE_DEGREE)
        })
    }

    /// Points whose degree is exactly `0.5`, in point order.
    pub fn transition_point(&self) -> &[f64] {
        self.transition_point.get_or_init(|| {
            trace!("computing transition points");
            self.points_where(|mu| mu == TRANSITION_DEGREE)
        })
    }

    /// Supremum of the degrees; `0.0` for an empty set.
    pub fn height(&self) -> f64 {
        *self.height.get_or_init(|| {
            trace!("computing height");
            self.degrees()
                .fold(0.0, |height, mu| if mu > height { mu } else { height })
        })
    }

    /// Points whose degree is strictly positive, in point order.
    pub fn support(&self) -> &[f64] {
        self.support.get_or_init(|| {
            trace!("computing support");
            self.points_where(|mu| mu > 0.0)
        })
    }

    /// Populates the core, transition-point and height caches.
    pub fn calculate(&self) {
        self.core();
        self.transition_point();
        self.height();
    }

    /// Returns `true` if the height is exactly `1.0`.
    pub fn is_normal(&self) -> bool {
        self.height() == 1.0
    }

    /// Rescales a subnormal set so that its height becomes `1.0`.
    ///
    /// Every degree is divided by the current height and the mutated
    /// mapping is returned. A set that is already normal is returned
    /// unchanged, so the operation is idempotent.
    ///
    /// The height cache is set to `1.0`; the core, transition-point and
    /// support caches are cleared and recomputed from the new degrees on
    /// next access.
    ///
    /// # Errors
    /// Returns [`FuzzyError::DegenerateSet`] if the height is `0.0` (empty or
    /// all-zero set). The set is left untouched.
    ///
    /// # Examples
    /// ```
    /// use u_fuzzy::FuzzySet;
    ///
    /// let mut set = FuzzySet::from_pairs([(1.0, 0.6), (2.0, 0.5), (8.0, 0.8)]);
    /// set.normalize().unwrap();
    /// assert_eq!(set.height(), 1.0);
    /// assert_eq!(set.degree(2.0), Some(0.625));
    /// assert_eq!(set.core(), &[8.0]);
    /// ```
    pub fn normalize(&mut self) -> FuzzyResult<&Membership> {
        let height = self.height();
        if height != 1.0 {
            if height <= 0.0 {
                return Err(FuzzyError::degenerate("normalize"));
            }
            debug!(height, points = self.len(), "normalizing fuzzy set");
            for mu in self.membership.values_mut() {
                *mu /= height;
            }
            self.invalidate_caches();
            self.height = OnceCell::from(1.0);
        }
        Ok(&self.membership)
    }

    fn invalidate_caches(&mut self) {
        debug!("invalidating derived caches");
        self.core.take();
        self.transition_point.take();
        self.height.take();
        self.support.take();
    }

    // ---------------------------------------------------------------------
    // Cuts and crisp approximation
    // ---------------------------------------------------------------------

    /// Points with degree `>= alpha`, in point order.
    pub fn alpha_cut(&self, alpha: f64) -> Vec<f64> {
        self.points_where(|mu| mu >= alpha)
    }

    /// Points with degree `> alpha`, in point order.
    pub fn strict_alpha_cut(&self, alpha: f64) -> Vec<f64> {
        self.points_where(|mu| mu > alpha)
    }

    /// Nearest crisp set: `1` where the degree exceeds `0.5`, else `0`.
    pub fn nearest_crisp_set(&self) -> Vec<u8> {
        self.degrees()
            .map(|mu| u8::from(mu > TRANSITION_DEGREE))
            .collect()
    }

    // ---------------------------------------------------------------------
    // Unary transforms
    // ---------------------------------------------------------------------

    /// Complement: `1 − μ` for every point, in point order.
    #[doc(alias = "addition")]
    pub fn complement(&self) -> Membership {
        self.map_degrees(|mu| 1.0 - mu)
    }

    /// Concentration hedge (CON, "very"): `μ²` for every point.
    pub fn concentration(&self) -> Membership {
        self.map_degrees(|mu| mu * mu)
    }

    /// Stretching hedge (DIL, "more or less"): `√μ` for every point.
    #[doc(alias = "dilation")]
    pub fn stretching(&self) -> Membership {
        self.map_degrees(f64::sqrt)
    }

    // ---------------------------------------------------------------------
    // Shape predicates
    // ---------------------------------------------------------------------

    /// No interior degree lies strictly below both neighbours' minimum.
    ///
    /// Sets of two points or fewer are convex.
    pub fn is_convex(&self) -> bool {
        let degrees: Vec<f64> = self.degrees().collect();
        degrees.windows(3).all(|w| w[1] >= w[0].min(w[2]))
    }

    /// No interior degree lies strictly above both neighbours' maximum.
    ///
    /// Sets of two points or fewer are concave.
    pub fn is_concave(&self) -> bool {
        let degrees: Vec<f64> = self.degrees().collect();
        degrees.windows(3).all(|w| w[1] <= w[0].max(w[2]))
    }

    /// Returns `true` if every degree of this set is at least the degree
    /// of the same point in `other`. Points absent from `other` count as `0`.
    pub fn is_dominate(&self, other: &FuzzySet) -> bool {
        self.membership
            .iter()
            .all(|(x, &mu)| mu >= other.membership.get(x).copied().unwrap_or(0.0))
    }
}

impl PartialEq for FuzzySet {
    /// Same points with the same degrees in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.membership.len() == other.membership.len()
            && self.membership.iter().eq(other.membership.iter())
    }
}

impl From<Membership> for FuzzySet {
    fn from(membership: Membership) -> Self {
        Self::new(membership)
    }
}

impl FromIterator<(f64, f64)> for FuzzySet {
    fn from_iter<I: IntoIterator<Item = (f64, f64)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
