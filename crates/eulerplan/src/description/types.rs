//! The `Description` snapshot.

use std::collections::BTreeSet;
use std::fmt;

use super::curve::AbstractCurve;
use super::zone::Zone;

/// A description `D = (K, B)`: a set of curves plus the zones they form.
///
/// Invariants:
/// - Every curve referenced by a zone belongs to `curves`.
/// - `zones` always holds `Zone::OUTSIDE`.
/// - Immutable; transformations build new descriptions.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Description {
    curves: BTreeSet<AbstractCurve>,
    zones: BTreeSet<Zone>,
}

impl Description {
    /// Build a description from curves and zones; `OUTSIDE` is added if missing.
    ///
    /// Consistency is established by the caller (parser or a decomposition /
    /// recomposition step) and only checked in debug builds.
    pub fn new(curves: BTreeSet<AbstractCurve>, mut zones: BTreeSet<Zone>) -> Self {
        zones.insert(Zone::OUTSIDE);
        debug_assert!(
            zones
                .iter()
                .all(|z| z.in_set().iter().all(|c| curves.contains(c))),
            "zone references a curve outside the curve set"
        );
        Self { curves, zones }
    }

    /// Build a description whose curve set is exactly the curves used by `zones`.
    pub fn from_zones<I>(zones: I) -> Self
    where
        I: IntoIterator<Item = Zone>,
    {
        let zones: BTreeSet<Zone> = zones.into_iter().collect();
        let curves = zones
            .iter()
            .flat_map(|z| z.in_set().iter().cloned())
            .collect();
        Self::new(curves, zones)
    }

    /// No curves; only the outside zone.
    pub fn empty() -> Self {
        Self::new(BTreeSet::new(), BTreeSet::new())
    }

    #[inline]
    pub fn curves(&self) -> &BTreeSet<AbstractCurve> {
        &self.curves
    }

    #[inline]
    pub fn zones(&self) -> &BTreeSet<Zone> {
        &self.zones
    }

    #[inline]
    pub fn num_curves(&self) -> usize {
        self.curves.len()
    }

    #[inline]
    pub fn num_zones(&self) -> usize {
        self.zones.len()
    }

    /// True when nothing but the outside zone remains.
    pub fn is_exhausted(&self) -> bool {
        self.curves.is_empty() || self.zones.iter().all(Zone::is_outside)
    }

    /// Zones whose in-set contains `curve`, in canonical order.
    pub fn zones_in<'a>(&'a self, curve: &'a AbstractCurve) -> impl Iterator<Item = &'a Zone> + 'a {
        self.zones.iter().filter(move |z| z.contains(curve))
    }

    /// Number of zones inside `curve`.
    pub fn num_zones_in(&self, curve: &AbstractCurve) -> usize {
        self.zones_in(curve).count()
    }

    #[inline]
    pub fn includes_curve(&self, curve: &AbstractCurve) -> bool {
        self.curves.contains(curve)
    }

    pub fn includes_label(&self, label: &str) -> bool {
        self.curves.iter().any(|c| c.label() == label)
    }

    #[inline]
    pub fn includes_zone(&self, zone: &Zone) -> bool {
        self.zones.contains(zone)
    }

    /// Render back to the whitespace-separated text format (outside zone omitted).
    pub fn informal(&self) -> String {
        self.zones
            .iter()
            .filter(|z| !z.is_outside())
            .map(|z| z.in_set().iter().map(AbstractCurve::label).collect::<String>())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for Description {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, zone) in self.zones.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{zone}")?;
        }
        Ok(())
    }
}
