//! Graph builder and cycle post-processing.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use nalgebra::DMatrix;

use super::johnson::{dedup_by_vertex_set, elementary_cycles};

/// Errors surfaced while building the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint was never added as a vertex.
    UnknownVertex { vertex: String },
    /// Both endpoints are the same vertex.
    SelfLoop { vertex: String },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::UnknownVertex { vertex } => write!(f, "unknown vertex {vertex}"),
            GraphError::SelfLoop { vertex } => write!(f, "self-loop on vertex {vertex}"),
        }
    }
}

impl std::error::Error for GraphError {}

/// A cycle: `edges[i]` joins `nodes[i]` and `nodes[(i + 1) % len]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphCycle<V, E> {
    pub nodes: Vec<V>,
    pub edges: Vec<E>,
}

impl<V, E> GraphCycle<V, E> {
    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<V: PartialEq, E> GraphCycle<V, E> {
    pub fn contains(&self, node: &V) -> bool {
        self.nodes.contains(node)
    }
}

/// Undirected simple graph with labelled edges, built for cycle enumeration.
#[derive(Clone, Debug)]
pub struct CycleFinder<V, E> {
    vertices: Vec<V>,
    index: HashMap<V, usize>,
    edges: HashMap<(usize, usize), E>,
}

impl<V, E> Default for CycleFinder<V, E> {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            index: HashMap::new(),
            edges: HashMap::new(),
        }
    }
}

#[inline]
fn edge_key(i: usize, j: usize) -> (usize, usize) {
    (i.min(j), i.max(j))
}

impl<V, E> CycleFinder<V, E>
where
    V: Clone + Eq + Hash + fmt::Debug,
    E: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex; returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }
        self.index.insert(vertex.clone(), self.vertices.len());
        self.vertices.push(vertex);
        true
    }

    /// Add an undirected edge; returns `Ok(false)` if the pair is already joined
    /// (the first label is kept).
    pub fn add_edge(&mut self, v1: &V, v2: &V, label: E) -> Result<bool, GraphError> {
        let i = self.position(v1)?;
        let j = self.position(v2)?;
        if i == j {
            return Err(GraphError::SelfLoop {
                vertex: format!("{v1:?}"),
            });
        }
        let key = edge_key(i, j);
        if self.edges.contains_key(&key) {
            return Ok(false);
        }
        self.edges.insert(key, label);
        Ok(true)
    }

    fn position(&self, vertex: &V) -> Result<usize, GraphError> {
        self.index
            .get(vertex)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex {
                vertex: format!("{vertex:?}"),
            })
    }

    #[inline]
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Label of the edge joining `v1` and `v2`, if any.
    pub fn edge(&self, v1: &V, v2: &V) -> Option<&E> {
        let i = *self.index.get(v1)?;
        let j = *self.index.get(v2)?;
        self.edges.get(&edge_key(i, j))
    }

    /// Symmetric adjacency matrix indexed by insertion order.
    pub fn adjacency_matrix(&self) -> DMatrix<bool> {
        let n = self.vertices.len();
        let mut adj = DMatrix::from_element(n, n, false);
        for &(i, j) in self.edges.keys() {
            adj[(i, j)] = true;
            adj[(j, i)] = true;
        }
        adj
    }

    /// Vertex-index cycles: no 2-cycles, one per vertex set, discovery order.
    fn index_cycles(&self) -> Vec<Vec<usize>> {
        let raw = elementary_cycles(&self.adjacency_matrix());
        let total = raw.len();
        let cycles = dedup_by_vertex_set(raw.into_iter().filter(|c| c.len() != 2).collect());
        tracing::trace!(raw = total, kept = cycles.len(), "elementary cycles");
        cycles
    }

    /// All elementary cycles as vertex lists, unsorted.
    pub fn all_cycles(&self) -> Vec<Vec<V>> {
        self.index_cycles()
            .into_iter()
            .map(|c| c.into_iter().map(|i| self.vertices[i].clone()).collect())
            .collect()
    }

    /// All elementary cycles with their edge labels, shortest first.
    pub fn compute_cycles(&self) -> Vec<GraphCycle<V, E>> {
        let mut cycles: Vec<GraphCycle<V, E>> = self
            .index_cycles()
            .into_iter()
            .map(|c| self.to_graph_cycle(&c))
            .collect();
        cycles.sort_by_key(|c| c.nodes.len());
        cycles
    }

    fn to_graph_cycle(&self, cycle: &[usize]) -> GraphCycle<V, E> {
        let len = cycle.len();
        let edges = (0..len)
            .map(|k| {
                let key = edge_key(cycle[k], cycle[(k + 1) % len]);
                // Consecutive vertices come from the adjacency matrix built from `edges`.
                self.edges[&key].clone()
            })
            .collect();
        GraphCycle {
            nodes: cycle.iter().map(|&i| self.vertices[i].clone()).collect(),
            edges,
        }
    }
}
