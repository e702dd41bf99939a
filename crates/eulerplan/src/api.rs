//! Curated internal API (UNSTABLE).
//!
//! A convenience surface for the CLI and experiments; breaking changes are
//! allowed. Prefer these re-exports for consistency across callers.

// Data model
pub use crate::description::{AbstractBasicRegion, AbstractCurve, Description, Zone};
// Decomposition
pub use crate::decomposition::{
    is_piercing_curve, power_of_two, take_step, DecomposeError, Decomposer, DecompositionStep,
    DecompositionStrategy, Innermost, PiercingFirst, StrategyType,
};
// Recomposition
pub use crate::recomposition::{
    clusters, recompose, Cluster, ClusterError, MatchedZones, RecomposeError, RecompositionData,
    RecompositionStep,
};
// Graphs
pub use crate::cycles::{CycleFinder, GraphCycle, GraphError};
pub use crate::dual::{split_cycle, EulerDual};
// Planning, examples and generators
pub use crate::catalog::{example, EXAMPLES};
pub use crate::plan::{plan, plan_with_defaults, Plan, PlanCfg, PlanError};
pub use crate::random::{draw_description, GeneratorError, RandomDescriptionCfg, ReplayToken};
