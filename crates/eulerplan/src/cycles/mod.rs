//! Elementary cycles of small undirected graphs.
//!
//! Purpose
//! - Enumerate every simple cycle of an undirected, edge-labelled graph with a
//!   fixed vertex set, independent of the diagram domain (`dual` is one user).
//!
//! Model
//! - Vertices are indexed by insertion order; edges become a symmetric boolean
//!   adjacency matrix (`nalgebra::DMatrix<bool>`).
//! - Johnson's search over that matrix yields directed elementary circuits. On a
//!   symmetric matrix every edge shows up as a 2-circuit and every cycle twice
//!   (once per direction), so 2-circuits are dropped and cycles are merged by
//!   vertex set.
//! - Vertex-set merging is coarse: two different cycles over the same vertices
//!   (possible once chords exist) count once, the first found wins.
//! - Results are sorted by length, ties in discovery order.
//!
//! Complexity: O((n + e)(c + 1)) for `c` circuits; `c` can grow exponentially
//! with the graph, so callers bound their inputs.

mod finder;
mod johnson;

pub use finder::{CycleFinder, GraphCycle, GraphError};
pub use johnson::{dedup_by_vertex_set, elementary_cycles};
