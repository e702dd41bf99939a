//! Serializable views of engine results. Zones and descriptions are rendered
//! with their `Display` forms (`{a,b}`, `{},{a},{a,b}`).

use eulerplan::cycles::GraphCycle;
use eulerplan::decomposition::{DecompositionStep, StrategyType};
use eulerplan::description::{AbstractCurve, Description, Zone};
use eulerplan::recomposition::{clusters, RecompositionData, RecompositionStep};
use eulerplan::Plan;
use serde::Serialize;

fn zones(zones: &[Zone]) -> Vec<String> {
    zones.iter().map(ToString::to_string).collect()
}

#[derive(Serialize)]
pub struct PlanReport {
    pub description: String,
    pub strategy: &'static str,
    pub decomposition: Vec<RemovalReport>,
    pub recomposition: Vec<InsertionReport>,
    pub round_trip: bool,
}

impl PlanReport {
    pub fn new(description: &Description, strategy: StrategyType, plan: &Plan) -> Self {
        Self {
            description: description.informal(),
            strategy: strategy.name(),
            decomposition: plan.decomposition.iter().map(RemovalReport::from).collect(),
            recomposition: plan.recomposition.iter().map(InsertionReport::from).collect(),
            round_trip: plan.result() == *description,
        }
    }
}

#[derive(Serialize)]
pub struct RemovalReport {
    pub removed: String,
    pub from: String,
    pub to: String,
}

impl From<&DecompositionStep> for RemovalReport {
    fn from(step: &DecompositionStep) -> Self {
        Self {
            removed: step.removed().to_string(),
            from: step.from().to_string(),
            to: step.to().to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct InsertionReport {
    pub added_curve: String,
    pub kind: &'static str,
    pub split_zones: Vec<String>,
    pub added_zones: Vec<String>,
    pub covered_zones: Vec<String>,
    /// Split zones grouped into 1-, 2- or 4-zone clusters.
    pub clusters: Vec<Vec<String>>,
    pub result: String,
}

fn kind(data: &RecompositionData) -> &'static str {
    if data.is_nested() {
        "nested"
    } else if data.is_single_piercing() {
        "single-piercing"
    } else if data.is_maybe_double_piercing() {
        "maybe-double-piercing"
    } else if data.is_not_piercing() {
        "not-piercing"
    } else {
        "irregular"
    }
}

impl From<&RecompositionStep> for InsertionReport {
    fn from(step: &RecompositionStep) -> Self {
        let data = step.data();
        Self {
            added_curve: data.added_curve.to_string(),
            kind: kind(data),
            split_zones: zones(&data.split_zones),
            added_zones: zones(&data.added_zones),
            covered_zones: zones(&data.covered_zones),
            clusters: clusters(data).iter().map(|c| zones(c.zones())).collect(),
            result: step.to().to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct CycleReport {
    pub zones: Vec<String>,
    pub curves: Vec<String>,
}

impl From<&GraphCycle<Zone, AbstractCurve>> for CycleReport {
    fn from(cycle: &GraphCycle<Zone, AbstractCurve>) -> Self {
        Self {
            zones: zones(&cycle.nodes),
            curves: cycle.edges.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct RandomDraw {
    pub seed: u64,
    pub index: u64,
    pub plan: PlanReport,
}

#[derive(Serialize)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub description: &'static str,
    pub curves: usize,
    pub zones: usize,
}
