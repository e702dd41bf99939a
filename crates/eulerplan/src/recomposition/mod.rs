//! Recomposition: replay a decomposition in reverse, one curve at a time.
//!
//! Purpose
//! - For every curve reinserted, report which existing zones it splits and which
//!   zones appear inside it (`RecompositionData`). This is the contract a
//!   geometry placer consumes to draw curves incrementally.
//!
//! Why this design
//! - The pairing between decomposition-space zones and the zones built so far
//!   is an explicit accumulator (`MatchedZones`) threaded through a fold,
//!   instead of hidden mutable state; each step is testable on its own.
//! - A lookup miss in `MatchedZones` means decomposition and recomposition
//!   disagree; the whole walk aborts with `RecomposeError::UnmatchedZone`.
//!
//! Code cross-refs: `decomposition::DecompositionStep`, `Cluster`.

mod cluster;
mod recomposer;
mod types;

pub use cluster::{clusters, Cluster, ClusterError};
pub use recomposer::{recompose, recompose_first_step, recompose_step, MatchedZones};
pub use types::{RecomposeError, RecompositionData, RecompositionStep};

#[cfg(test)]
mod tests;
