//! Producers of graphs grouped by order.

use std::collections::HashSet;
use std::io::BufRead;

use inp_core::errors::{ErrorInfo, InpError};
use inp_graph::bits::iter_bits;
use inp_graph::{canonical_labeling, from_graph6, Graph, MAX_ORDER};

/// A lazy, non-restartable stream of graphs requested one order at a time.
///
/// Orders must be requested in non-decreasing sequence. `Ok(None)` marks the
/// end of the requested order and is not an error.
pub trait GraphSource {
    /// Next graph of `order`, or `None` once that order is exhausted.
    fn next_graph(&mut self, order: usize) -> Result<Option<Graph>, InpError>;

    /// True when no graph of any order remains. Unbounded sources never
    /// report exhaustion.
    fn is_exhausted(&self) -> bool {
        false
    }
}

fn order_regression(requested: usize, current: usize) -> InpError {
    InpError::Graph(
        ErrorInfo::new("order-regression", "graph source cannot return to a smaller order")
            .with_context("requested", requested)
            .with_context("current", current),
    )
}

/// Every connected graph of each order exactly once, up to isomorphism.
///
/// The graphs of order `n` are obtained by attaching a new vertex to every
/// connected graph of order `n − 1` along every non-empty neighbour set and
/// keeping the first graph of each canonical certificate. Every connected
/// graph has a vertex whose removal leaves it connected, so nothing is
/// missed. Graphs are emitted in canonical form, in a fixed order.
#[derive(Debug, Clone)]
pub struct ConnectedGraphEnumerator {
    order: usize,
    parents: Vec<Graph>,
    current: Vec<Graph>,
    seen: HashSet<Vec<u64>>,
    parent_index: usize,
    next_neighbors: u64,
}

impl ConnectedGraphEnumerator {
    /// Enumerator positioned before the single graph of order one.
    pub fn new() -> Self {
        Self {
            order: 1,
            parents: Vec::new(),
            current: Vec::new(),
            seen: HashSet::new(),
            parent_index: 0,
            next_neighbors: 1,
        }
    }

    /// Order currently being produced.
    pub fn order(&self) -> usize {
        self.order
    }

    fn produce(&mut self) -> Result<Option<Graph>, InpError> {
        if self.order == 1 {
            if !self.current.is_empty() {
                return Ok(None);
            }
            let single = Graph::empty(1)?;
            self.current.push(single.clone());
            return Ok(Some(single));
        }
        if self.order > MAX_ORDER {
            return Err(InpError::Graph(
                ErrorInfo::new("order-limit", "order exceeds the supported limit")
                    .with_context("order", self.order),
            ));
        }
        let new_vertex = self.order - 1;
        let limit = 1u64 << new_vertex;
        while let Some(parent) = self.parents.get(self.parent_index) {
            if self.next_neighbors >= limit {
                self.parent_index += 1;
                self.next_neighbors = 1;
                continue;
            }
            let neighbors = self.next_neighbors;
            self.next_neighbors += 1;
            let mut edges = parent.edges().to_vec();
            edges.extend(iter_bits(neighbors).map(|v| (v, new_vertex)));
            let candidate = Graph::new(self.order, &edges)?;
            let labeling = canonical_labeling(&candidate);
            if self.seen.insert(labeling.certificate) {
                let canonical = candidate.permuted(&labeling.labeling);
                self.current.push(canonical.clone());
                return Ok(Some(canonical));
            }
        }
        Ok(None)
    }

    fn advance(&mut self) -> Result<(), InpError> {
        while self.produce()?.is_some() {}
        self.parents = std::mem::take(&mut self.current);
        self.seen.clear();
        self.parent_index = 0;
        self.next_neighbors = 1;
        self.order += 1;
        Ok(())
    }
}

impl Default for ConnectedGraphEnumerator {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphSource for ConnectedGraphEnumerator {
    fn next_graph(&mut self, order: usize) -> Result<Option<Graph>, InpError> {
        if order == 0 {
            return Ok(None);
        }
        if order < self.order {
            return Err(order_regression(order, self.order));
        }
        while self.order < order {
            self.advance()?;
        }
        self.produce()
    }
}

/// Graphs read from graph6 lines, for example the output of an external
/// generator.
///
/// Lines must be grouped by non-decreasing order. Blank lines are skipped.
#[derive(Debug)]
pub struct Graph6Source<R> {
    reader: R,
    pending: Option<Graph>,
    line: usize,
    finished: bool,
}

impl<R: BufRead> Graph6Source<R> {
    /// Wraps `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
            line: 0,
            finished: false,
        }
    }

    fn fill(&mut self) -> Result<(), InpError> {
        let mut buffer = String::new();
        while self.pending.is_none() && !self.finished {
            buffer.clear();
            let read = self.reader.read_line(&mut buffer).map_err(|err| {
                InpError::Serde(ErrorInfo::new("source-read", err.to_string()))
                    .with_context("line", self.line + 1)
            })?;
            if read == 0 {
                self.finished = true;
                break;
            }
            self.line += 1;
            if buffer.trim().is_empty() {
                continue;
            }
            let line = self.line;
            self.pending = Some(from_graph6(&buffer).map_err(|err| err.with_context("line", line))?);
        }
        Ok(())
    }
}

impl<R: BufRead> GraphSource for Graph6Source<R> {
    fn next_graph(&mut self, order: usize) -> Result<Option<Graph>, InpError> {
        self.fill()?;
        let Some(found) = self.pending.as_ref().map(Graph::order) else {
            return Ok(None);
        };
        if found > order {
            return Ok(None);
        }
        if found < order {
            return Err(InpError::Serde(
                ErrorInfo::new("unsorted-input", "graph6 lines are not grouped by order")
                    .with_context("line", self.line)
                    .with_context("order", found)
                    .with_context("requested", order),
            ));
        }
        Ok(self.pending.take())
    }

    fn is_exhausted(&self) -> bool {
        self.finished && self.pending.is_none()
    }
}
