//! The immutable bitset graph and its structural queries.

use std::collections::VecDeque;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

use inp_core::errors::{ErrorInfo, InpError};

use crate::bits::{full_mask, iter_bits};

/// Largest order representable by the 64-bit adjacency rows.
pub const MAX_ORDER: usize = 64;

/// Immutable simple undirected graph on the vertices `0..order`.
///
/// Adjacency is stored as one bit row per vertex. The graph is never mutated
/// after construction; every structural operation returns a new value.
/// Derived quantities such as the degree list are computed on first use.
#[derive(Debug, Clone)]
pub struct Graph {
    order: usize,
    adjacency: Vec<u64>,
    edges: Vec<(usize, usize)>,
    degrees: OnceLock<Vec<usize>>,
}

impl Graph {
    /// Builds a graph from an edge list, rejecting loops, repeated edges,
    /// vertices outside `0..order` and orders above [`MAX_ORDER`].
    pub fn new(order: usize, edges: &[(usize, usize)]) -> Result<Self, InpError> {
        ensure_order(order)?;
        let mut adjacency = vec![0u64; order];
        for &(u, v) in edges {
            if u >= order || v >= order {
                return Err(InpError::Graph(
                    ErrorInfo::new("vertex-out-of-range", "edge references a missing vertex")
                        .with_context("edge", format!("{u}-{v}"))
                        .with_context("order", order),
                ));
            }
            if u == v {
                return Err(InpError::Graph(
                    ErrorInfo::new("self-loop", "simple graphs cannot contain loops")
                        .with_context("vertex", u),
                ));
            }
            if adjacency[u] & (1u64 << v) != 0 {
                return Err(InpError::Graph(
                    ErrorInfo::new("duplicate-edge", "edge listed more than once")
                        .with_context("edge", format!("{u}-{v}")),
                ));
            }
            adjacency[u] |= 1u64 << v;
            adjacency[v] |= 1u64 << u;
        }
        Ok(Self::from_rows(order, adjacency))
    }

    /// Returns the edgeless graph of the given order.
    pub fn empty(order: usize) -> Result<Self, InpError> {
        ensure_order(order)?;
        Ok(Self::from_rows(order, vec![0u64; order]))
    }

    /// Builds a graph from symmetric, loop-free adjacency rows.
    pub(crate) fn from_rows(order: usize, adjacency: Vec<u64>) -> Self {
        debug_assert_eq!(adjacency.len(), order);
        let mut edges = Vec::new();
        for (u, row) in adjacency.iter().enumerate() {
            for v in iter_bits(*row >> u >> 1) {
                edges.push((u, u + 1 + v));
            }
        }
        Self {
            order,
            adjacency,
            edges,
            degrees: OnceLock::new(),
        }
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of edges.
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    /// Sorted edge list with `u < v` for every pair `(u, v)`.
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Adjacency rows, one bit mask per vertex.
    pub fn adjacency_rows(&self) -> &[u64] {
        &self.adjacency
    }

    /// Mask containing every vertex.
    pub fn vertex_mask(&self) -> u64 {
        full_mask(self.order)
    }

    /// Returns whether `u` and `v` are adjacent.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        u < self.order && v < self.order && self.adjacency[u] & (1u64 << v) != 0
    }

    /// Neighbourhood of `v` as a mask.
    pub fn neighbor_mask(&self, v: usize) -> u64 {
        self.adjacency[v]
    }

    /// Neighbours of `v` in ascending order.
    pub fn neighbors(&self, v: usize) -> Vec<usize> {
        iter_bits(self.adjacency[v]).collect()
    }

    /// Degree of `v`.
    pub fn degree(&self, v: usize) -> usize {
        self.adjacency[v].count_ones() as usize
    }

    /// Degrees indexed by vertex.
    pub fn degrees(&self) -> &[usize] {
        self.degrees
            .get_or_init(|| self.adjacency.iter().map(|row| row.count_ones() as usize).collect())
    }

    /// Degrees sorted in non-increasing order.
    pub fn degree_sequence(&self) -> Vec<usize> {
        let mut sequence = self.degrees().to_vec();
        sequence.sort_unstable_by(|a, b| b.cmp(a));
        sequence
    }

    /// Largest degree, or zero for the order-zero graph.
    pub fn max_degree(&self) -> usize {
        self.degrees().iter().copied().max().unwrap_or(0)
    }

    /// Smallest degree, or zero for the order-zero graph.
    pub fn min_degree(&self) -> usize {
        self.degrees().iter().copied().min().unwrap_or(0)
    }

    /// Mean degree, or zero for the order-zero graph.
    pub fn average_degree(&self) -> f64 {
        if self.order == 0 {
            return 0.0;
        }
        2.0 * self.size() as f64 / self.order as f64
    }

    /// Union of the neighbourhoods of the vertices in `set`.
    pub fn open_neighborhood(&self, set: u64) -> u64 {
        iter_bits(set).fold(0u64, |acc, v| acc | self.adjacency[v])
    }

    /// `set` together with its open neighbourhood.
    pub fn closed_neighborhood(&self, set: u64) -> u64 {
        set | self.open_neighborhood(set)
    }

    /// Returns whether the vertices in `set` are pairwise adjacent.
    pub fn is_clique(&self, set: u64) -> bool {
        iter_bits(set).all(|v| (set & !(1u64 << v)) & !self.adjacency[v] == 0)
    }

    /// Returns whether the vertices in `set` are pairwise non-adjacent.
    pub fn is_independent(&self, set: u64) -> bool {
        iter_bits(set).all(|v| self.adjacency[v] & set == 0)
    }

    /// Subgraph induced by `set`, relabelled in ascending vertex order.
    pub fn induced_subgraph_mask(&self, set: u64) -> Graph {
        let kept: Vec<usize> = iter_bits(set & self.vertex_mask()).collect();
        self.relabelled(&kept)
    }

    /// Subgraph induced by `vertices`, relabelled in the order given.
    pub fn induced_subgraph(&self, vertices: &[usize]) -> Result<Graph, InpError> {
        let mut seen = 0u64;
        for &v in vertices {
            if v >= self.order {
                return Err(InpError::Graph(
                    ErrorInfo::new("vertex-out-of-range", "subgraph references a missing vertex")
                        .with_context("vertex", v)
                        .with_context("order", self.order),
                ));
            }
            if seen & (1u64 << v) != 0 {
                return Err(InpError::Graph(
                    ErrorInfo::new("duplicate-vertex", "subgraph lists a vertex twice")
                        .with_context("vertex", v),
                ));
            }
            seen |= 1u64 << v;
        }
        Ok(self.relabelled(vertices))
    }

    /// Graph with the vertices in `set` removed, relabelled in ascending order.
    pub fn delete_vertices(&self, set: u64) -> Graph {
        self.induced_subgraph_mask(self.vertex_mask() & !set)
    }

    /// Image of the graph under `perm`, where `perm[v]` is the new label of `v`.
    pub fn permuted(&self, perm: &[usize]) -> Graph {
        let mut rows = vec![0u64; self.order];
        for (u, row) in self.adjacency.iter().enumerate() {
            rows[perm[u]] = iter_bits(*row).fold(0u64, |acc, v| acc | (1u64 << perm[v]));
        }
        Graph::from_rows(self.order, rows)
    }

    fn relabelled(&self, vertices: &[usize]) -> Graph {
        let k = vertices.len();
        let mut rows = vec![0u64; k];
        for (i, &u) in vertices.iter().enumerate() {
            for (j, &v) in vertices.iter().enumerate() {
                if self.adjacency[u] & (1u64 << v) != 0 {
                    rows[i] |= 1u64 << j;
                }
            }
        }
        Graph::from_rows(k, rows)
    }

    /// Complement graph on the same vertex set.
    pub fn complement(&self) -> Graph {
        let full = self.vertex_mask();
        let rows = self
            .adjacency
            .iter()
            .enumerate()
            .map(|(v, row)| !row & full & !(1u64 << v))
            .collect();
        Graph::from_rows(self.order, rows)
    }

    /// Returns whether the graph is connected. Orders zero and one count as connected.
    pub fn is_connected(&self) -> bool {
        if self.order <= 1 {
            return true;
        }
        let mut reached = 1u64;
        let mut frontier = 1u64;
        while frontier != 0 {
            let next = self.open_neighborhood(frontier) & !reached;
            reached |= next;
            frontier = next;
        }
        reached == self.vertex_mask()
    }

    /// Returns whether the vertices admit a proper two-colouring.
    pub fn is_bipartite(&self) -> bool {
        let mut colour: Vec<Option<bool>> = vec![None; self.order];
        let mut queue = VecDeque::new();
        for start in 0..self.order {
            if colour[start].is_some() {
                continue;
            }
            colour[start] = Some(false);
            queue.push_back(start);
            while let Some(u) = queue.pop_front() {
                let side = colour[u] == Some(true);
                for v in iter_bits(self.adjacency[u]) {
                    match colour[v] {
                        None => {
                            colour[v] = Some(!side);
                            queue.push_back(v);
                        }
                        Some(other) if other == side => return false,
                        Some(_) => {}
                    }
                }
            }
        }
        true
    }

    /// Articulation points in ascending order.
    pub fn cut_vertices(&self) -> Vec<usize> {
        let mut state = CutState {
            discovery: vec![usize::MAX; self.order],
            low: vec![0; self.order],
            is_cut: vec![false; self.order],
            clock: 0,
        };
        for root in 0..self.order {
            if state.discovery[root] == usize::MAX {
                self.cut_dfs(root, None, &mut state);
            }
        }
        (0..self.order).filter(|&v| state.is_cut[v]).collect()
    }

    fn cut_dfs(&self, u: usize, parent: Option<usize>, state: &mut CutState) {
        state.discovery[u] = state.clock;
        state.low[u] = state.clock;
        state.clock += 1;
        let mut children = 0usize;
        for v in iter_bits(self.adjacency[u]) {
            if state.discovery[v] == usize::MAX {
                children += 1;
                self.cut_dfs(v, Some(u), state);
                state.low[u] = state.low[u].min(state.low[v]);
                if parent.is_some() && state.low[v] >= state.discovery[u] {
                    state.is_cut[u] = true;
                }
            } else if Some(v) != parent {
                state.low[u] = state.low[u].min(state.discovery[v]);
            }
        }
        if parent.is_none() && children > 1 {
            state.is_cut[u] = true;
        }
    }

    /// Tensor product with `K2`: vertex `(v, i)` is labelled `v + i * order`
    /// and `(u, 0)` is adjacent to `(v, 1)` whenever `uv` is an edge.
    pub fn bipartite_double_cover(&self) -> Result<Graph, InpError> {
        let n = self.order;
        ensure_order(2 * n).map_err(|err| err.with_context("operation", "bipartite-double-cover"))?;
        let mut rows = vec![0u64; 2 * n];
        for (u, row) in self.adjacency.iter().enumerate() {
            rows[u] = row << n;
            rows[u + n] = *row;
        }
        Ok(Graph::from_rows(2 * n, rows))
    }

    /// Exact independence number by branch and bound.
    ///
    /// Exponential in the worst case; intended as a reference oracle for
    /// diagnostics and tests rather than for classification.
    pub fn independence_number(&self) -> usize {
        let mut best = 0usize;
        self.grow_independent(self.vertex_mask(), 0, &mut best);
        best
    }

    fn grow_independent(&self, candidates: u64, size: usize, best: &mut usize) {
        if candidates == 0 {
            *best = (*best).max(size);
            return;
        }
        if size + candidates.count_ones() as usize <= *best {
            return;
        }
        let v = candidates.trailing_zeros() as usize;
        let rest = candidates & !(1u64 << v);
        self.grow_independent(rest & !self.adjacency[v], size + 1, best);
        // A vertex with no candidate neighbours is always in some maximum set.
        if self.adjacency[v] & candidates != 0 {
            self.grow_independent(rest, size, best);
        }
    }
}

struct CutState {
    discovery: Vec<usize>,
    low: Vec<usize>,
    is_cut: Vec<bool>,
    clock: usize,
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.adjacency == other.adjacency
    }
}

impl Eq for Graph {}

impl Hash for Graph {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.order.hash(state);
        self.adjacency.hash(state);
    }
}

fn ensure_order(order: usize) -> Result<(), InpError> {
    if order > MAX_ORDER {
        return Err(InpError::Graph(
            ErrorInfo::new("order-limit", "graph order exceeds the adjacency row width")
                .with_context("order", order)
                .with_context("max", MAX_ORDER),
        ));
    }
    Ok(())
}
