//! Canonical labelling by colour refinement and individualization.
//!
//! The search explores the individualization tree of the equitable
//! partition, keeps the smallest relabelled adjacency matrix seen at a leaf,
//! and prunes sibling branches that lie in one orbit of the automorphisms
//! discovered so far.

use std::cmp::Ordering;

use crate::bits::mask_of;
use crate::graph::Graph;

/// Result of canonical labelling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalLabeling {
    /// `labeling[v]` is the canonical label of vertex `v`.
    pub labeling: Vec<usize>,
    /// Adjacency rows of the relabelled graph; equal iff the graphs are isomorphic.
    pub certificate: Vec<u64>,
    /// Number of automorphisms found while pruning (a lower bound on the group size).
    pub automorphisms_found: usize,
}

/// Computes the canonical labelling of `graph`.
pub fn canonical_labeling(graph: &Graph) -> CanonicalLabeling {
    let n = graph.order();
    let mut search = Search {
        graph,
        best: None,
        automorphisms: Vec::new(),
    };
    let initial = if n == 0 {
        Vec::new()
    } else {
        vec![(0..n).collect::<Vec<_>>()]
    };
    search.visit(initial, &mut Vec::new());
    let (certificate, labeling) = search.best.unwrap_or_default();
    CanonicalLabeling {
        labeling,
        certificate,
        automorphisms_found: search.automorphisms.len(),
    }
}

/// Returns the canonical representative of the isomorphism class of `graph`.
pub fn canonical_form(graph: &Graph) -> Graph {
    let canonical = canonical_labeling(graph);
    graph.permuted(&canonical.labeling)
}

/// Returns whether the two graphs are isomorphic.
pub fn is_isomorphic(a: &Graph, b: &Graph) -> bool {
    if a.order() != b.order() || a.size() != b.size() || a.degree_sequence() != b.degree_sequence()
    {
        return false;
    }
    canonical_labeling(a).certificate == canonical_labeling(b).certificate
}

struct Search<'g> {
    graph: &'g Graph,
    best: Option<(Vec<u64>, Vec<usize>)>,
    automorphisms: Vec<Vec<usize>>,
}

impl Search<'_> {
    fn visit(&mut self, cells: Vec<Vec<usize>>, path: &mut Vec<usize>) {
        let cells = refine(self.graph, cells);
        let Some(target) = cells.iter().position(|cell| cell.len() > 1) else {
            self.record_leaf(&cells);
            return;
        };
        let cell = cells[target].clone();
        let mut tried: Vec<usize> = Vec::new();
        for &v in &cell {
            let roots = self.orbit_roots(path);
            if tried.iter().any(|&w| roots[w] == roots[v]) {
                continue;
            }
            tried.push(v);
            let mut child = Vec::with_capacity(cells.len() + 1);
            child.extend_from_slice(&cells[..target]);
            child.push(vec![v]);
            child.push(cell.iter().copied().filter(|&w| w != v).collect());
            child.extend_from_slice(&cells[target + 1..]);
            path.push(v);
            self.visit(child, path);
            path.pop();
        }
    }

    fn record_leaf(&mut self, cells: &[Vec<usize>]) {
        let mut labeling = vec![0usize; self.graph.order()];
        for (position, cell) in cells.iter().enumerate() {
            labeling[cell[0]] = position;
        }
        let certificate = self.graph.permuted(&labeling).adjacency_rows().to_vec();
        match &self.best {
            None => self.best = Some((certificate, labeling)),
            Some((best_certificate, best_labeling)) => match certificate.cmp(best_certificate) {
                Ordering::Less => self.best = Some((certificate, labeling)),
                Ordering::Equal => {
                    let mut inverse = vec![0usize; labeling.len()];
                    for (v, &label) in best_labeling.iter().enumerate() {
                        inverse[label] = v;
                    }
                    let automorphism = labeling.iter().map(|&label| inverse[label]).collect();
                    self.automorphisms.push(automorphism);
                }
                Ordering::Greater => {}
            },
        }
    }

    /// Orbit representatives under the automorphisms fixing `path` pointwise.
    fn orbit_roots(&self, path: &[usize]) -> Vec<usize> {
        let n = self.graph.order();
        let mut parent: Vec<usize> = (0..n).collect();
        for gamma in self
            .automorphisms
            .iter()
            .filter(|gamma| path.iter().all(|&p| gamma[p] == p))
        {
            for (v, &image) in gamma.iter().enumerate() {
                union(&mut parent, v, image);
            }
        }
        (0..n).map(|v| find(&mut parent, v)).collect()
    }
}

/// Refines an ordered partition until it is equitable.
///
/// Each cell is split by the number of neighbours its vertices have in every
/// cell of the current partition; the pieces are ordered by that signature.
fn refine(graph: &Graph, mut cells: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
    loop {
        let masks: Vec<u64> = cells.iter().map(|cell| mask_of(cell)).collect();
        let mut next = Vec::with_capacity(cells.len());
        for cell in &cells {
            if cell.len() == 1 {
                next.push(cell.clone());
                continue;
            }
            let mut keyed: Vec<(Vec<u32>, usize)> = cell
                .iter()
                .map(|&v| {
                    let row = graph.neighbor_mask(v);
                    let signature = masks.iter().map(|mask| (row & mask).count_ones()).collect();
                    (signature, v)
                })
                .collect();
            keyed.sort();
            let mut start = 0;
            for idx in 1..=keyed.len() {
                if idx == keyed.len() || keyed[idx].0 != keyed[start].0 {
                    next.push(keyed[start..idx].iter().map(|(_, v)| *v).collect());
                    start = idx;
                }
            }
        }
        if next.len() == cells.len() {
            return next;
        }
        cells = next;
    }
}

fn find(parent: &mut [usize], idx: usize) -> usize {
    if parent[idx] != idx {
        let root = find(parent, parent[idx]);
        parent[idx] = root;
    }
    parent[idx]
}

fn union(parent: &mut [usize], a: usize, b: usize) {
    let ra = find(parent, a);
    let rb = find(parent, b);
    if ra != rb {
        parent[rb.max(ra)] = ra.min(rb);
    }
}
