//! Johnson's elementary-circuit search over an adjacency matrix.

use std::collections::HashSet;

use nalgebra::DMatrix;

/// All elementary circuits of the directed graph given by `adj`
/// (`adj[(i, j)]` = edge i→j). Each circuit starts at its least vertex.
pub fn elementary_cycles(adj: &DMatrix<bool>) -> Vec<Vec<usize>> {
    let n = adj.nrows();
    let lists: Vec<Vec<usize>> = (0..n)
        .map(|i| (0..n).filter(|&j| adj[(i, j)]).collect())
        .collect();

    let mut search = Circuits {
        blocked: vec![false; n],
        b: vec![Vec::new(); n],
        stack: Vec::new(),
        cycles: Vec::new(),
    };
    let mut s = 0;
    while s < n {
        let Some(component) = least_component(&lists, s) else {
            break;
        };
        let start = component[0];
        let mut inside = vec![false; n];
        for &v in &component {
            inside[v] = true;
            search.blocked[v] = false;
            search.b[v].clear();
        }
        let sub: Vec<Vec<usize>> = (0..n)
            .map(|v| {
                if inside[v] {
                    lists[v].iter().copied().filter(|&w| inside[w]).collect()
                } else {
                    Vec::new()
                }
            })
            .collect();
        search.circuit(start, &sub);
        s = start + 1;
    }
    search.cycles
}

/// Keep the first cycle of every vertex set, preserving order.
pub fn dedup_by_vertex_set(cycles: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    let mut seen: HashSet<Vec<usize>> = HashSet::new();
    cycles
        .into_iter()
        .filter(|cycle| {
            let mut key = cycle.clone();
            key.sort_unstable();
            seen.insert(key)
        })
        .collect()
}

struct Circuits {
    blocked: Vec<bool>,
    b: Vec<Vec<usize>>,
    stack: Vec<usize>,
    cycles: Vec<Vec<usize>>,
}

impl Circuits {
    /// Every circuit through `s`. Frames are `(vertex, next neighbour, found)`
    /// so path length never touches the call stack.
    fn circuit(&mut self, s: usize, adj: &[Vec<usize>]) {
        let mut frames = vec![(s, 0usize, false)];
        self.stack.push(s);
        self.blocked[s] = true;
        while let Some(frame) = frames.last_mut() {
            let (v, next, found) = *frame;
            if let Some(&w) = adj[v].get(next) {
                frame.1 += 1;
                if w == s {
                    frame.2 = true;
                    self.cycles.push(self.stack.clone());
                } else if !self.blocked[w] {
                    self.stack.push(w);
                    self.blocked[w] = true;
                    frames.push((w, 0, false));
                }
                continue;
            }
            frames.pop();
            if found {
                self.unblock(v);
                if let Some(parent) = frames.last_mut() {
                    parent.2 = true;
                }
            } else {
                for &w in &adj[v] {
                    if !self.b[w].contains(&v) {
                        self.b[w].push(v);
                    }
                }
            }
            self.stack.pop();
        }
    }

    fn unblock(&mut self, u: usize) {
        let mut pending = vec![u];
        while let Some(u) = pending.pop() {
            self.blocked[u] = false;
            while let Some(w) = self.b[u].pop() {
                if self.blocked[w] {
                    pending.push(w);
                }
            }
        }
    }
}

/// The non-trivial strongly connected component (of the subgraph on vertices
/// `>= from`) holding the least vertex, sorted ascending.
fn least_component(adj: &[Vec<usize>], from: usize) -> Option<Vec<usize>> {
    let n = adj.len();
    let mut tarjan = Tarjan {
        adj,
        from,
        index: vec![None; n],
        low: vec![0; n],
        on_stack: vec![false; n],
        stack: Vec::new(),
        next: 0,
        components: Vec::new(),
    };
    for v in from..n {
        if tarjan.index[v].is_none() {
            tarjan.visit(v);
        }
    }
    tarjan
        .components
        .into_iter()
        .filter(|c| c.len() > 1)
        .map(|mut c| {
            c.sort_unstable();
            c
        })
        .min_by_key(|c| c[0])
}

struct Tarjan<'a> {
    adj: &'a [Vec<usize>],
    from: usize,
    index: Vec<Option<usize>>,
    low: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    next: usize,
    components: Vec<Vec<usize>>,
}

impl Tarjan<'_> {
    fn open(&mut self, v: usize) {
        self.index[v] = Some(self.next);
        self.low[v] = self.next;
        self.next += 1;
        self.stack.push(v);
        self.on_stack[v] = true;
    }

    /// Depth-first from `root` with `(vertex, next neighbour)` frames.
    fn visit(&mut self, root: usize) {
        let adj = self.adj;
        let mut frames = vec![(root, 0usize)];
        self.open(root);
        while let Some(frame) = frames.last_mut() {
            let v = frame.0;
            if let Some(&w) = adj[v].get(frame.1) {
                frame.1 += 1;
                if w < self.from {
                    continue;
                }
                match self.index[w] {
                    None => {
                        self.open(w);
                        frames.push((w, 0));
                    }
                    Some(iw) if self.on_stack[w] => {
                        self.low[v] = self.low[v].min(iw);
                    }
                    Some(_) => {}
                }
                continue;
            }

            frames.pop();
            if let Some(&(parent, _)) = frames.last() {
                self.low[parent] = self.low[parent].min(self.low[v]);
            }
            if self.index[v] == Some(self.low[v]) {
                let mut component = Vec::new();
                while let Some(w) = self.stack.pop() {
                    self.on_stack[w] = false;
                    component.push(w);
                    if w == v {
                        break;
                    }
                }
                self.components.push(component);
            }
        }
    }
}
