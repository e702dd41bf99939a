//! Abstract Euler dual: zones as vertices, single-curve crossings as edges.
//!
//! Two zones are joined iff their in-sets differ by exactly one curve
//! (`Zone::straddled_contour`); the edge is labelled by that curve. This is the
//! combinatorial skeleton of the geometric dual a placer would route along;
//! geometric adjacency of concrete regions may be sparser.

use crate::cycles::{CycleFinder, GraphCycle};
use crate::description::{AbstractCurve, Description, Zone};
use crate::recomposition::RecompositionStep;

/// The dual graph of one description, ready for cycle enumeration.
#[derive(Clone, Debug)]
pub struct EulerDual {
    graph: CycleFinder<Zone, AbstractCurve>,
}

impl EulerDual {
    pub fn new(description: &Description) -> Self {
        let mut graph = CycleFinder::new();
        let zones: Vec<&Zone> = description.zones().iter().collect();
        for zone in &zones {
            graph.add_vertex((*zone).clone());
        }
        for (i, z1) in zones.iter().enumerate() {
            for z2 in &zones[i + 1..] {
                if let Some(curve) = z1.straddled_contour(z2) {
                    // Both endpoints were just added and differ.
                    let added = graph.add_edge(z1, z2, curve);
                    debug_assert_eq!(added, Ok(true));
                }
            }
        }
        Self { graph }
    }

    #[inline]
    pub fn graph(&self) -> &CycleFinder<Zone, AbstractCurve> {
        &self.graph
    }

    #[inline]
    pub fn num_zones(&self) -> usize {
        self.graph.num_vertices()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    /// Zones adjacent to `zone`, with the curve crossed, in canonical order.
    pub fn neighbours(&self, zone: &Zone) -> Vec<(&Zone, &AbstractCurve)> {
        self.graph
            .vertices()
            .iter()
            .filter_map(|other| self.graph.edge(zone, other).map(|curve| (other, curve)))
            .collect()
    }

    /// Every elementary cycle, shortest first.
    pub fn cycles(&self) -> Vec<GraphCycle<Zone, AbstractCurve>> {
        self.graph.compute_cycles()
    }

    /// Cycles visiting every zone in `zones`, shortest first.
    pub fn cycles_through(&self, zones: &[Zone]) -> Vec<GraphCycle<Zone, AbstractCurve>> {
        self.cycles()
            .into_iter()
            .filter(|cycle| zones.iter().all(|z| cycle.contains(z)))
            .collect()
    }
}

/// The shortest dual cycle of `step.from()` through all zones the step splits.
///
/// `None` for nested curves (a single split zone needs no cycle) or when the
/// split zones lie on no common cycle.
pub fn split_cycle(step: &RecompositionStep) -> Option<GraphCycle<Zone, AbstractCurve>> {
    let split = &step.data().split_zones;
    if split.len() < 2 {
        return None;
    }
    EulerDual::new(step.from())
        .cycles_through(split)
        .into_iter()
        .next()
}
