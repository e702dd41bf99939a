//! Step-wise decomposition driver.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::description::{AbstractCurve, Description, Zone};

use super::strategy::{DecompositionStrategy, StrategyType};

/// Errors surfaced while decomposing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecomposeError {
    /// The strategy name is reserved but has no implementation.
    UnsupportedStrategy { strategy: StrategyType },
    /// The strategy picked a curve that is not (or no longer) in the description.
    CurveNotPresent { curve: AbstractCurve },
}

impl fmt::Display for DecomposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecomposeError::UnsupportedStrategy { strategy } => {
                write!(f, "strategy `{strategy}` is not implemented")
            }
            DecomposeError::CurveNotPresent { curve } => {
                write!(f, "strategy selected curve `{curve}` which is not present")
            }
        }
    }
}

impl std::error::Error for DecomposeError {}

/// The effect of removing one curve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecompositionStep {
    from: Description,
    to: Description,
    zones_moved: BTreeMap<Zone, Zone>,
    removed: AbstractCurve,
}

impl DecompositionStep {
    /// Description before the removal.
    #[inline]
    pub fn from(&self) -> &Description {
        &self.from
    }

    /// Description after the removal.
    #[inline]
    pub fn to(&self) -> &Description {
        &self.to
    }

    /// Pre-removal zone → post-removal zone, for zones that contained `removed`.
    #[inline]
    pub fn zones_moved(&self) -> &BTreeMap<Zone, Zone> {
        &self.zones_moved
    }

    #[inline]
    pub fn removed(&self) -> &AbstractCurve {
        &self.removed
    }
}

impl fmt::Display for DecompositionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "D_Step[removed={}, from={}, to={}, moved=",
            self.removed, self.from, self.to
        )?;
        for (i, (old, new)) in self.zones_moved.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{old}->{new}")?;
        }
        f.write_str("]")
    }
}

/// Remove `curve` from `description`, recording which zones moved.
pub fn take_step(description: &Description, curve: &AbstractCurve) -> DecompositionStep {
    let mut curves = description.curves().clone();
    curves.remove(curve);

    let mut zones = BTreeSet::new();
    let mut zones_moved = BTreeMap::new();
    for zone in description.zones() {
        let moved = zone.move_outside(curve);
        if moved != *zone {
            zones_moved.insert(zone.clone(), moved.clone());
        }
        zones.insert(moved);
    }

    DecompositionStep {
        from: description.clone(),
        to: Description::new(curves, zones),
        zones_moved,
        removed: curve.clone(),
    }
}

/// Drives a strategy until the description is exhausted.
pub struct Decomposer {
    strategy: Box<dyn DecompositionStrategy>,
}

impl Decomposer {
    /// Decomposer for a named strategy.
    pub fn new(kind: StrategyType) -> Result<Self, DecomposeError> {
        kind.strategy()
            .map(|strategy| Self { strategy })
            .ok_or(DecomposeError::UnsupportedStrategy { strategy: kind })
    }

    /// Decomposer for any strategy value (or closure).
    pub fn with_strategy<S>(strategy: S) -> Self
    where
        S: DecompositionStrategy + 'static,
    {
        Self {
            strategy: Box::new(strategy),
        }
    }

    /// Decompose `description` into steps, earliest removal first.
    ///
    /// Curves returned together by one strategy call are removed in order, each
    /// producing its own step. Every step strictly shrinks the curve set, so the
    /// loop terminates; a strategy re-selecting a removed curve is an error.
    pub fn decompose(
        &self,
        description: &Description,
    ) -> Result<Vec<DecompositionStep>, DecomposeError> {
        let mut current = description.clone();
        let mut steps = Vec::with_capacity(description.num_curves());
        loop {
            let to_remove = self.strategy.curves_to_remove(&current);
            if to_remove.is_empty() {
                break;
            }
            for curve in to_remove {
                if !current.includes_curve(&curve) {
                    return Err(DecomposeError::CurveNotPresent { curve });
                }
                let step = take_step(&current, &curve);
                tracing::debug!(removed = %curve, zones = step.to().num_zones(), "decomposition step");
                current = step.to().clone();
                steps.push(step);
            }
        }
        tracing::info!(
            steps = steps.len(),
            description = %description.informal(),
            "decomposition done"
        );
        Ok(steps)
    }
}

impl fmt::Debug for Decomposer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decomposer").finish_non_exhaustive()
    }
}
