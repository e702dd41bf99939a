//! End-to-end layout plan: decompose, then recompose.

use std::fmt;

use crate::decomposition::{DecomposeError, Decomposer, DecompositionStep, StrategyType};
use crate::description::Description;
use crate::recomposition::{recompose, RecomposeError, RecompositionStep};

/// Planning configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlanCfg {
    pub strategy: StrategyType,
}

/// Either stage failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    Decompose(DecomposeError),
    Recompose(RecomposeError),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanError::Decompose(e) => write!(f, "decomposition failed: {e}"),
            PlanError::Recompose(e) => write!(f, "recomposition failed: {e}"),
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlanError::Decompose(e) => Some(e),
            PlanError::Recompose(e) => Some(e),
        }
    }
}

impl From<DecomposeError> for PlanError {
    fn from(e: DecomposeError) -> Self {
        PlanError::Decompose(e)
    }
}

impl From<RecomposeError> for PlanError {
    fn from(e: RecomposeError) -> Self {
        PlanError::Recompose(e)
    }
}

/// Removal order (diagnostic) and insertion order (what a placer consumes).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    pub decomposition: Vec<DecompositionStep>,
    pub recomposition: Vec<RecompositionStep>,
}

impl Plan {
    /// Description reached after the last insertion (empty when nothing to draw).
    pub fn result(&self) -> Description {
        self.recomposition
            .last()
            .map(|s| s.to().clone())
            .unwrap_or_default()
    }
}

/// Decompose `description` with `cfg.strategy` and recompose the steps.
pub fn plan(description: &Description, cfg: PlanCfg) -> Result<Plan, PlanError> {
    let decomposition = Decomposer::new(cfg.strategy)?.decompose(description)?;
    let recomposition = recompose(&decomposition)?;
    Ok(Plan {
        decomposition,
        recomposition,
    })
}

/// Convenience: plan with the default (innermost) strategy.
pub fn plan_with_defaults(description: &Description) -> Result<Plan, PlanError> {
    plan(description, PlanCfg::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn catalog_examples_plan_back_to_themselves() {
        for (name, text) in catalog::EXAMPLES {
            let d = Description::from_informal(text);
            for strategy in [StrategyType::Innermost, StrategyType::PiercedFirst] {
                let p = plan(&d, PlanCfg { strategy }).unwrap();
                assert_eq!(p.decomposition.len(), d.num_curves(), "{name}");
                assert_eq!(p.result(), d, "{name} with {strategy}");
            }
        }
    }

    #[test]
    fn reserved_strategy_surfaces_as_plan_error() {
        let cfg = PlanCfg {
            strategy: StrategyType::ReverseAlphabetical,
        };
        let err = plan(&Description::empty(), cfg).unwrap_err();
        assert!(matches!(err, PlanError::Decompose(_)));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn empty_plan_result_is_empty_description() {
        let p = plan_with_defaults(&Description::empty()).unwrap();
        assert!(p.decomposition.is_empty());
        assert_eq!(p.result(), Description::empty());
    }
}
