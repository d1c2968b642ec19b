//! Maximum cardinality matching in general graphs (Edmonds' blossom algorithm).

use std::collections::VecDeque;

use inp_graph::bits::iter_bits;
use inp_graph::Graph;

const UNSET: usize = usize::MAX;

/// Size of a maximum matching of `graph`.
pub fn matching_number(graph: &Graph) -> usize {
    maximum_matching(graph).len()
}

/// Edges of one maximum matching, each as `(u, v)` with `u < v`, sorted.
pub fn maximum_matching(graph: &Graph) -> Vec<(usize, usize)> {
    let mut state = BlossomState::new(graph);
    for root in 0..graph.order() {
        if state.mate[root] == UNSET {
            if let Some(end) = state.find_augmenting_path(root) {
                state.augment(end);
            }
        }
    }
    let mut edges: Vec<(usize, usize)> = (0..graph.order())
        .filter(|&v| state.mate[v] != UNSET && v < state.mate[v])
        .map(|v| (v, state.mate[v]))
        .collect();
    edges.sort_unstable();
    edges
}

struct BlossomState<'g> {
    graph: &'g Graph,
    mate: Vec<usize>,
    parent: Vec<usize>,
    base: Vec<usize>,
    used: Vec<bool>,
    in_blossom: Vec<bool>,
    queue: VecDeque<usize>,
}

impl<'g> BlossomState<'g> {
    fn new(graph: &'g Graph) -> Self {
        let n = graph.order();
        let mut state = Self {
            graph,
            mate: vec![UNSET; n],
            parent: vec![UNSET; n],
            base: (0..n).collect(),
            used: vec![false; n],
            in_blossom: vec![false; n],
            queue: VecDeque::with_capacity(n),
        };
        state.greedy_start();
        state
    }

    fn greedy_start(&mut self) {
        for &(u, v) in self.graph.edges() {
            if self.mate[u] == UNSET && self.mate[v] == UNSET {
                self.mate[u] = v;
                self.mate[v] = u;
            }
        }
    }

    /// Grows an alternating tree from `root`; returns the exposed vertex that
    /// ends an augmenting path, if one exists.
    fn find_augmenting_path(&mut self, root: usize) -> Option<usize> {
        let n = self.graph.order();
        self.used.iter_mut().for_each(|flag| *flag = false);
        self.parent.iter_mut().for_each(|p| *p = UNSET);
        for (v, b) in self.base.iter_mut().enumerate() {
            *b = v;
        }
        self.queue.clear();
        self.used[root] = true;
        self.queue.push_back(root);

        while let Some(v) = self.queue.pop_front() {
            for to in iter_bits(self.graph.neighbor_mask(v)) {
                if self.base[v] == self.base[to] || self.mate[v] == to {
                    continue;
                }
                let to_is_outer = to == root || (self.mate[to] != UNSET && self.parent[self.mate[to]] != UNSET);
                if to_is_outer {
                    let current = self.lowest_common_base(v, to);
                    self.in_blossom.iter_mut().for_each(|flag| *flag = false);
                    self.mark_path(v, current, to);
                    self.mark_path(to, current, v);
                    for i in 0..n {
                        if self.in_blossom[self.base[i]] {
                            self.base[i] = current;
                            if !self.used[i] {
                                self.used[i] = true;
                                self.queue.push_back(i);
                            }
                        }
                    }
                } else if self.parent[to] == UNSET {
                    self.parent[to] = v;
                    if self.mate[to] == UNSET {
                        return Some(to);
                    }
                    let next = self.mate[to];
                    self.used[next] = true;
                    self.queue.push_back(next);
                }
            }
        }
        None
    }

    fn lowest_common_base(&self, a: usize, b: usize) -> usize {
        let mut seen = vec![false; self.graph.order()];
        let mut a = a;
        loop {
            a = self.base[a];
            seen[a] = true;
            if self.mate[a] == UNSET {
                break;
            }
            a = self.parent[self.mate[a]];
        }
        let mut b = b;
        loop {
            b = self.base[b];
            if seen[b] {
                return b;
            }
            b = self.parent[self.mate[b]];
        }
    }

    fn mark_path(&mut self, mut v: usize, blossom_base: usize, mut child: usize) {
        while self.base[v] != blossom_base {
            self.in_blossom[self.base[v]] = true;
            self.in_blossom[self.base[self.mate[v]]] = true;
            self.parent[v] = child;
            child = self.mate[v];
            v = self.parent[self.mate[v]];
        }
    }

    fn augment(&mut self, mut v: usize) {
        while v != UNSET {
            let pv = self.parent[v];
            let next = self.mate[pv];
            self.mate[v] = pv;
            self.mate[pv] = v;
            v = next;
        }
    }
}
