//! Reverse walk over decomposition steps.

use std::collections::BTreeMap;
use std::fmt;

use crate::decomposition::DecompositionStep;
use crate::description::{AbstractCurve, Description, Zone};

use super::types::{RecomposeError, RecompositionData, RecompositionStep};

/// Decomposition-space zone → zone in the description recomposed so far.
///
/// Threaded through the reverse walk: each step reads the entries for the zones
/// it splits and records the zones it creates for the steps that follow.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MatchedZones {
    map: BTreeMap<Zone, Zone>,
}

impl MatchedZones {
    /// The pairing before any curve exists: the outside zone matches itself.
    pub fn seed() -> Self {
        let mut map = BTreeMap::new();
        map.insert(Zone::OUTSIDE, Zone::OUTSIDE);
        Self { map }
    }

    #[inline]
    pub fn get(&self, zone: &Zone) -> Option<&Zone> {
        self.map.get(zone)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Zone, &Zone)> {
        self.map.iter()
    }

    fn insert(&mut self, decomposed: Zone, recomposed: Zone) {
        self.map.insert(decomposed, recomposed);
    }

    fn remove(&mut self, decomposed: &Zone) {
        self.map.remove(decomposed);
    }
}

impl fmt::Display for MatchedZones {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (k, v)) in self.map.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{k}->{v}")?;
        }
        Ok(())
    }
}

/// Recompose the last decomposition step: the first curve, alone on the plane.
///
/// Yields `{OUTSIDE, {c}}`, splitting `OUTSIDE` into `{c}`, with both zones
/// matched to themselves.
///
/// A curve owning no zone (possible through `Description::new`) splits
/// nothing: `split_zones` is empty and `to` stays `{OUTSIDE}` with `c` added
/// to its curves, which is what the decomposition removed.
pub fn recompose_first_step(
    step: &DecompositionStep,
) -> Result<(RecompositionStep, MatchedZones), RecomposeError> {
    recompose_step(step, step.to(), MatchedZones::seed())
}

/// Reinsert `step.removed()` into `previous` (the last recomposed description).
///
/// Every zone the curve left during decomposition is looked up in `matched`
/// to find the zone it splits now; a miss is fatal. The zone's inside part is
/// recorded against the pre-removal decomposition zone for later steps.
pub fn recompose_step(
    step: &DecompositionStep,
    previous: &Description,
    mut matched: MatchedZones,
) -> Result<(RecompositionStep, MatchedZones), RecomposeError> {
    let removed = step.removed();
    let new_curve = AbstractCurve::new(removed.label());

    let mut curves = previous.curves().clone();
    curves.insert(new_curve.clone());
    let mut zones = previous.zones().clone();

    let mut split_zones = Vec::with_capacity(step.zones_moved().len());
    let mut added_zones = Vec::with_capacity(step.zones_moved().len());
    let mut covered_zones = Vec::new();

    for (original, moved) in step.zones_moved() {
        let to_split = matched
            .get(moved)
            .cloned()
            .ok_or_else(|| RecomposeError::UnmatchedZone {
                zone: moved.clone(),
                curve: removed.clone(),
            })?;
        let added = to_split.move_inside(&new_curve);
        zones.insert(added.clone());

        // Nothing of this zone lay outside the curve before decomposition.
        if !step.from().includes_zone(moved) {
            zones.remove(&to_split);
            matched.remove(moved);
            covered_zones.push(to_split.clone());
        }

        let inside = moved.move_inside(removed);
        debug_assert_eq!(&inside, original);
        matched.insert(inside, added.clone());

        split_zones.push(to_split);
        added_zones.push(added);
    }

    tracing::debug!(
        curve = %new_curve,
        split = split_zones.len(),
        covered = covered_zones.len(),
        "recomposition step"
    );
    tracing::trace!(matched = %matched, "matched zones");

    let data = RecompositionData {
        added_curve: new_curve,
        split_zones,
        added_zones,
        covered_zones,
    };
    let next = RecompositionStep::new(previous.clone(), Description::new(curves, zones), data)?;
    Ok((next, matched))
}

/// Recompose a full decomposition (earliest removal first) into insertion order.
///
/// The last removed curve is inserted first; the result has one step per
/// decomposition step.
pub fn recompose(steps: &[DecompositionStep]) -> Result<Vec<RecompositionStep>, RecomposeError> {
    let mut reversed = steps.iter().rev();
    let Some(last) = reversed.next() else {
        return Ok(Vec::new());
    };
    let (first, matched) = recompose_first_step(last)?;
    let mut acc = Vec::with_capacity(steps.len());
    acc.push(first);

    let (result, matched) = reversed.try_fold((acc, matched), |(mut acc, matched), step| {
        let previous = acc[acc.len() - 1].to();
        let (next, matched) = recompose_step(step, previous, matched)?;
        acc.push(next);
        Ok::<_, RecomposeError>((acc, matched))
    })?;

    tracing::info!(
        steps = result.len(),
        matched = matched.len(),
        "recomposition done"
    );
    Ok(result)
}
