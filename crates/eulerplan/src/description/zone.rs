//! Zones (abstract basic regions) keyed by their in-set.

use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;

use super::curve::AbstractCurve;

/// An abstract basic region: the set of curves whose interior contains it.
///
/// Invariants:
/// - Equality and hashing are structural on the in-set.
/// - Order: fewer curves first, then element-wise by curve label.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AbstractBasicRegion {
    in_set: BTreeSet<AbstractCurve>,
}

/// Short alias used across the engine.
pub type Zone = AbstractBasicRegion;

impl AbstractBasicRegion {
    /// The zone outside every curve (empty in-set).
    pub const OUTSIDE: Self = Self {
        in_set: BTreeSet::new(),
    };

    #[inline]
    pub fn new(in_set: BTreeSet<AbstractCurve>) -> Self {
        Self { in_set }
    }

    pub fn from_curves<I>(curves: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<AbstractCurve>,
    {
        Self::new(curves.into_iter().map(Into::into).collect())
    }

    #[inline]
    pub fn outside() -> Self {
        Self::OUTSIDE
    }

    #[inline]
    pub fn is_outside(&self) -> bool {
        self.in_set.is_empty()
    }

    #[inline]
    pub fn in_set(&self) -> &BTreeSet<AbstractCurve> {
        &self.in_set
    }

    #[inline]
    pub fn contains(&self, curve: &AbstractCurve) -> bool {
        self.in_set.contains(curve)
    }

    #[inline]
    pub fn num_curves(&self) -> usize {
        self.in_set.len()
    }

    /// True iff every curve of `other` also contains this zone.
    #[inline]
    pub fn is_superset_of(&self, other: &Self) -> bool {
        self.in_set.is_superset(&other.in_set)
    }

    /// The zone as it appears once `curve` is introduced around it.
    pub fn move_inside(&self, curve: &AbstractCurve) -> Self {
        let mut in_set = self.in_set.clone();
        in_set.insert(curve.clone());
        Self { in_set }
    }

    /// The zone as it appears once `curve` no longer exists.
    pub fn move_outside(&self, curve: &AbstractCurve) -> Self {
        let mut in_set = self.in_set.clone();
        in_set.remove(curve);
        Self { in_set }
    }

    /// The single curve whose boundary separates `self` from `other`, if any.
    ///
    /// Present iff the symmetric difference of the two in-sets is exactly one curve.
    pub fn straddled_contour(&self, other: &Self) -> Option<AbstractCurve> {
        if self.in_set.len().abs_diff(other.in_set.len()) != 1 {
            return None;
        }
        let mut diff = self.in_set.symmetric_difference(&other.in_set);
        match (diff.next(), diff.next()) {
            (Some(curve), None) => Some(curve.clone()),
            _ => None,
        }
    }
}

impl Default for AbstractBasicRegion {
    fn default() -> Self {
        Self::OUTSIDE
    }
}

impl Ord for AbstractBasicRegion {
    fn cmp(&self, other: &Self) -> Ordering {
        self.in_set
            .len()
            .cmp(&other.in_set.len())
            .then_with(|| self.in_set.iter().cmp(other.in_set.iter()))
    }
}

impl PartialOrd for AbstractBasicRegion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for AbstractBasicRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, curve) in self.in_set.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{curve}")?;
        }
        f.write_str("}")
    }
}
