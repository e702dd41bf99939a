//! Recomposition records and errors.

use std::fmt;

use crate::description::{AbstractCurve, Description, Zone};

/// Errors surfaced while recomposing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecomposeError {
    /// A decomposition-space zone has no counterpart built so far.
    UnmatchedZone { zone: Zone, curve: AbstractCurve },
    /// The added curve is already part of the `from` description.
    CurveAlreadyPresent { curve: AbstractCurve },
    /// The added curve is missing from the `to` description.
    CurveMissing { curve: AbstractCurve },
}

impl fmt::Display for RecomposeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecomposeError::UnmatchedZone { zone, curve } => write!(
                f,
                "no recomposed zone matches {zone} while reinserting `{curve}`"
            ),
            RecomposeError::CurveAlreadyPresent { curve } => {
                write!(f, "added curve `{curve}` already present before the step")
            }
            RecomposeError::CurveMissing { curve } => {
                write!(f, "added curve `{curve}` not present after the step")
            }
        }
    }
}

impl std::error::Error for RecomposeError {}

/// How one curve enters the diagram.
///
/// `split_zones[i]` (in `from`) is divided by the new curve, and
/// `added_zones[i]` (in `to`) is the part of it inside the curve.
/// `covered_zones` lists split zones with no part left outside the curve; they
/// are absent from `to`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecompositionData {
    pub added_curve: AbstractCurve,
    pub split_zones: Vec<Zone>,
    pub added_zones: Vec<Zone>,
    pub covered_zones: Vec<Zone>,
}

impl RecompositionData {
    /// The curve splits a single zone (it is nested).
    #[inline]
    pub fn is_nested(&self) -> bool {
        self.split_zones.len() == 1
    }

    #[inline]
    pub fn is_single_piercing(&self) -> bool {
        self.split_zones.len() == 2
    }

    #[inline]
    pub fn is_maybe_double_piercing(&self) -> bool {
        self.split_zones.len() == 4
    }

    #[inline]
    pub fn is_not_piercing(&self) -> bool {
        self.split_zones.len() > 4
    }

    #[inline]
    pub fn split_zone(&self, index: usize) -> Option<&Zone> {
        self.split_zones.get(index)
    }
}

impl fmt::Display for RecompositionData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let join = |zones: &[Zone]| {
            zones
                .iter()
                .map(|z| z.to_string())
                .collect::<Vec<_>>()
                .join(",")
        };
        write!(
            f,
            "R_Data[added={}, split=[{}], new=[{}]",
            self.added_curve,
            join(&self.split_zones),
            join(&self.added_zones)
        )?;
        if !self.covered_zones.is_empty() {
            write!(f, ", covered=[{}]", join(&self.covered_zones))?;
        }
        f.write_str("]")
    }
}

/// One reinsertion: `to` has exactly one curve more than `from`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecompositionStep {
    from: Description,
    to: Description,
    data: RecompositionData,
}

impl RecompositionStep {
    /// Validates that the added curve is new in `from` and present in `to`.
    pub fn new(
        from: Description,
        to: Description,
        data: RecompositionData,
    ) -> Result<Self, RecomposeError> {
        if from.includes_curve(&data.added_curve) {
            return Err(RecomposeError::CurveAlreadyPresent {
                curve: data.added_curve,
            });
        }
        if !to.includes_curve(&data.added_curve) {
            return Err(RecomposeError::CurveMissing {
                curve: data.added_curve,
            });
        }
        Ok(Self { from, to, data })
    }

    #[inline]
    pub fn from(&self) -> &Description {
        &self.from
    }

    #[inline]
    pub fn to(&self) -> &Description {
        &self.to
    }

    #[inline]
    pub fn data(&self) -> &RecompositionData {
        &self.data
    }

    #[inline]
    pub fn added_curve(&self) -> &AbstractCurve {
        &self.data.added_curve
    }
}

impl fmt::Display for RecompositionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "R_Step[data={}, from={}, to={}]",
            self.data, self.from, self.to
        )
    }
}
