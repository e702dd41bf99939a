//! Abstract descriptions: curves, zones, and consistent (curve, zone) snapshots.
//!
//! Purpose
//! - Provide the canonical value types every engine stage works on: labelled
//!   curves (`AbstractCurve`), zones identified by their in-set
//!   (`AbstractBasicRegion`), and immutable `Description` snapshots.
//! - Fix one total order for curves and zones so set/map iteration (and thus
//!   every strategy tie-break) is reproducible.
//!
//! Conventions
//! - Curves order lexicographically by label.
//! - Zones order by in-set size first, then element-wise by curve order.
//! - Every transformation returns a new value; nothing here is mutated after
//!   construction.
//!
//! Code cross-refs: `decomposition::Decomposer`, `recomposition::recompose`.

mod curve;
mod parse;
mod types;
mod zone;

pub use curve::AbstractCurve;
pub use types::Description;
pub use zone::{AbstractBasicRegion, Zone};
