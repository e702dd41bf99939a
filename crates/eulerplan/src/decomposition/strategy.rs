//! Curve-removal strategies (innermost, piercing-first).

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::description::{AbstractCurve, Description, Zone};

/// Chooses the curves to remove next; an empty result ends the decomposition.
pub trait DecompositionStrategy {
    fn curves_to_remove(&self, description: &Description) -> Vec<AbstractCurve>;
}

impl<F> DecompositionStrategy for F
where
    F: Fn(&Description) -> Vec<AbstractCurve>,
{
    fn curves_to_remove(&self, description: &Description) -> Vec<AbstractCurve> {
        self(description)
    }
}

/// Named strategy choices exposed to callers.
///
/// The alphabetical variants are reserved names without an implementation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum StrategyType {
    Alphabetical,
    ReverseAlphabetical,
    #[default]
    Innermost,
    PiercedFirst,
}

impl StrategyType {
    pub const ALL: [StrategyType; 4] = [
        StrategyType::Alphabetical,
        StrategyType::ReverseAlphabetical,
        StrategyType::Innermost,
        StrategyType::PiercedFirst,
    ];

    /// Human-readable name for menus and reports.
    pub fn ui_name(self) -> &'static str {
        match self {
            StrategyType::Alphabetical => "Decompose in alphabetic order",
            StrategyType::ReverseAlphabetical => "Decompose in reverse alphabetic order",
            StrategyType::Innermost => "Decompose using fewest-zone contours first",
            StrategyType::PiercedFirst => "Decompose using piercing curves first",
        }
    }

    /// Short identifier accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            StrategyType::Alphabetical => "alphabetical",
            StrategyType::ReverseAlphabetical => "reverse-alphabetical",
            StrategyType::Innermost => "innermost",
            StrategyType::PiercedFirst => "piercing",
        }
    }

    /// The strategy implementation, if this variant has one.
    pub fn strategy(self) -> Option<Box<dyn DecompositionStrategy>> {
        match self {
            StrategyType::Innermost => Some(Box::new(Innermost)),
            StrategyType::PiercedFirst => Some(Box::new(PiercingFirst)),
            StrategyType::Alphabetical | StrategyType::ReverseAlphabetical => None,
        }
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyType::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let known: Vec<&str> = StrategyType::ALL.iter().map(|t| t.name()).collect();
                format!("unknown strategy `{s}` (expected one of {})", known.join(", "))
            })
    }
}

/// Remove the curve with the fewest zones inside it.
#[derive(Clone, Copy, Debug, Default)]
pub struct Innermost;

impl DecompositionStrategy for Innermost {
    fn curves_to_remove(&self, description: &Description) -> Vec<AbstractCurve> {
        innermost_curve(description).into_iter().collect()
    }
}

/// The first curve (in canonical order) minimizing `num_zones_in`.
///
/// Ties resolve to the earliest curve; this is deterministic, not a preference.
pub fn innermost_curve(description: &Description) -> Option<AbstractCurve> {
    let mut best: Option<(&AbstractCurve, usize)> = None;
    for curve in description.curves() {
        let nz = description.num_zones_in(curve);
        match best {
            Some((_, best_nz)) if best_nz <= nz => {}
            _ => best = Some((curve, nz)),
        }
    }
    best.map(|(curve, _)| curve.clone())
}

/// Remove piercing curves first (fewest zones among them); otherwise every
/// curve tied for the fewest zones.
#[derive(Clone, Copy, Debug, Default)]
pub struct PiercingFirst;

impl DecompositionStrategy for PiercingFirst {
    fn curves_to_remove(&self, description: &Description) -> Vec<AbstractCurve> {
        let piercing = min_zone_curves(
            description,
            description
                .curves()
                .iter()
                .filter(|c| is_piercing_curve(c, description)),
        );
        if !piercing.is_empty() {
            return piercing;
        }
        // No piercing curve: same minimum rule, over every curve.
        min_zone_curves(description, description.curves().iter())
    }
}

fn min_zone_curves<'a>(
    description: &Description,
    candidates: impl Iterator<Item = &'a AbstractCurve>,
) -> Vec<AbstractCurve> {
    let mut result = Vec::new();
    let mut best_nz = usize::MAX;
    for curve in candidates {
        let nz = description.num_zones_in(curve);
        if nz < best_nz {
            result.clear();
            result.push(curve.clone());
            best_nz = nz;
        } else if nz == best_nz {
            result.push(curve.clone());
        }
    }
    result
}

/// Whether `curve` pierces the description as a clean combinatorial cube.
///
/// With `Z` the zones inside `curve`, all of the following must hold:
/// 1. each zone in `Z` has a partner zone across exactly `curve`;
/// 2. `|Z| = 2^n`;
/// 3. every zone in `Z` is a superset of the smallest one;
/// 4. the zones in `Z` use exactly `n` curves beyond the smallest zone's.
pub fn is_piercing_curve(curve: &AbstractCurve, description: &Description) -> bool {
    let zones_in: Vec<&Zone> = description.zones_in(curve).collect();

    let all_partnered = zones_in.iter().all(|zone| {
        description
            .zones()
            .iter()
            .any(|other| zone.straddled_contour(other).as_ref() == Some(curve))
    });
    if !all_partnered {
        return false;
    }

    let Some(power) = power_of_two(zones_in.len()) else {
        return false;
    };

    // Earliest zone among those with the fewest curves.
    let Some(smallest) = zones_in
        .iter()
        .copied()
        .reduce(|a, b| if a.num_curves() <= b.num_curves() { a } else { b })
    else {
        return false;
    };

    if !zones_in.iter().all(|zone| zone.is_superset_of(smallest)) {
        return false;
    }

    let added: BTreeSet<&AbstractCurve> = zones_in
        .iter()
        .flat_map(|zone| zone.in_set().iter())
        .filter(|c| !smallest.contains(c))
        .collect();
    added.len() == power as usize
}

/// `Some(n)` when `k = 2^n`, `None` otherwise (including `k = 0`).
pub fn power_of_two(k: usize) -> Option<u32> {
    if k.is_power_of_two() {
        Some(k.trailing_zeros())
    } else {
        None
    }
}
