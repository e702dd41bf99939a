//! Euler-diagram layout planning.
//!
//! Given the zones an Euler diagram must have, decide in which order its curves
//! can be drawn and which existing zones each new curve splits. No geometry is
//! computed here; a placer consumes `RecompositionStep`s one at a time.
//!
//! Pipeline
//! - `description`: curves, zones, `Description` snapshots and the text format.
//! - `decomposition`: strategies and the `Decomposer` (removal order).
//! - `recomposition`: the reverse walk producing insertion steps, plus `Cluster`.
//! - `cycles`: generic elementary-cycle enumeration; `dual` applies it to zones.
//!
//! API Policy
//! - There is no stable public API yet; `api` collects the curated surface.
//! - Everything is synchronous and allocation-only: descriptions are immutable
//!   values, so any engine call may run on any thread.

pub mod api;
pub mod catalog;
pub mod cycles;
pub mod decomposition;
pub mod description;
pub mod dual;
pub mod plan;
pub mod random;
pub mod recomposition;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use plan::{plan, plan_with_defaults, Plan, PlanCfg, PlanError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::decomposition::{Decomposer, DecompositionStep, StrategyType};
    pub use crate::description::{AbstractBasicRegion, AbstractCurve, Description, Zone};
    pub use crate::plan::{plan, plan_with_defaults, Plan, PlanCfg};
    pub use crate::recomposition::{recompose, RecompositionData, RecompositionStep};
}

#[cfg(test)]
pub(crate) mod testing {
    //! Proptest strategies shared by module tests.

    use crate::description::{AbstractCurve, Description, Zone};
    use proptest::prelude::*;

    /// Descriptions over up to five curves `a..e` with random zone sets.
    pub fn arb_description() -> impl Strategy<Value = Description> {
        (1usize..=5).prop_flat_map(|n| {
            proptest::collection::vec(1u32..(1u32 << n), 0..12).prop_map(move |masks| {
                Description::from_zones(masks.into_iter().map(|mask| {
                    Zone::from_curves(
                        (0..n)
                            .filter(|i| mask & (1 << i) != 0)
                            .map(|i| AbstractCurve::from(char::from(b'a' + i as u8))),
                    )
                }))
            })
        })
    }
}
