//! The search loop: classify graphs order by order until one is difficult.

use inp_core::errors::InpError;
use inp_core::provenance::{RegistryProvenance, SchemaVersion};
use inp_core::tolerance::Tolerance;
use inp_graph::{canonical_form, canonical_hash, to_graph6, Graph};
use inp_theory::{Classifier, RegistryPreset, Verdict};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::report::{DifficultGraphRecord, NullReporter, Reporter};
use crate::source::{ConnectedGraphEnumerator, GraphSource};

/// Caller controls for one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOptions {
    /// Log progress and emit the record to the reporter.
    #[serde(default)]
    pub verbose: bool,
    /// Largest order examined; `None` searches without limit.
    #[serde(default)]
    pub max_order: Option<usize>,
    /// First order requested from the source.
    #[serde(default = "SearchOptions::default_start_order")]
    pub start_order: usize,
}

impl SearchOptions {
    fn default_start_order() -> usize {
        1
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            max_order: None,
            start_order: Self::default_start_order(),
        }
    }
}

/// Counters owned by the driver for the duration of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchState {
    /// Order currently being examined.
    pub order: usize,
    /// Graphs classified so far.
    pub graphs_examined: u64,
}

/// The first difficult graph and how it was found.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// The graph as supplied by the source.
    pub graph: Graph,
    /// Its order.
    pub order: usize,
    /// `⌈lower bound⌉`.
    pub lower: i64,
    /// `⌊upper bound⌋`.
    pub upper: i64,
    /// Graphs classified, the difficult one included.
    pub graphs_examined: u64,
    /// Registries that produced the verdict.
    pub provenance: RegistryProvenance,
}

impl SearchOutcome {
    /// Record handed to reporters.
    pub fn record(&self) -> DifficultGraphRecord {
        DifficultGraphRecord {
            schema_version: SchemaVersion::default(),
            order: self.order,
            graph: to_graph6(&canonical_form(&self.graph)),
            canonical_hash: canonical_hash(&self.graph),
            lower_bound: self.lower,
            upper_bound: self.upper,
            graphs_examined: self.graphs_examined,
            provenance: self.provenance.clone(),
        }
    }
}

/// Pulls graphs from `source` in increasing order and stops at the first
/// difficult one.
///
/// Classification failures end the search with that error. Reporter
/// failures are logged and ignored. Returns `Ok(None)` when `max_order` is
/// passed or the source runs dry.
pub fn run_search(
    source: &mut dyn GraphSource,
    classifier: &Classifier,
    options: &SearchOptions,
    reporter: &mut dyn Reporter,
) -> Result<Option<SearchOutcome>, InpError> {
    let mut state = SearchState {
        order: options.start_order,
        graphs_examined: 0,
    };
    while options.max_order.map_or(true, |max| state.order <= max) {
        let before = state.graphs_examined;
        while let Some(graph) = source.next_graph(state.order)? {
            state.graphs_examined += 1;
            let verdict = classifier.classify(&graph).map_err(|err| {
                err.with_context("graph", to_graph6(&graph))
                    .with_context("graphs-examined", state.graphs_examined)
            })?;
            if let Verdict::Difficult { bracket } = verdict {
                let outcome = SearchOutcome {
                    order: state.order,
                    lower: bracket.lower,
                    upper: bracket.upper,
                    graphs_examined: state.graphs_examined,
                    provenance: classifier.provenance(),
                    graph,
                };
                if options.verbose {
                    let record = outcome.record();
                    info!(
                        graph = %record.graph,
                        order = record.order,
                        lower = record.lower_bound,
                        upper = record.upper_bound,
                        examined = record.graphs_examined,
                        "difficult graph found"
                    );
                    if let Err(err) = reporter.report(&record) {
                        warn!(error = %err, "failed to report difficult graph");
                    }
                }
                return Ok(Some(outcome));
            }
        }
        let examined = state.graphs_examined - before;
        if options.verbose {
            info!(order = state.order, examined, total = state.graphs_examined, "order exhausted");
        } else {
            debug!(order = state.order, examined, "order exhausted");
        }
        if source.is_exhausted() {
            return Ok(None);
        }
        state.order += 1;
    }
    Ok(None)
}

/// Searches all connected graphs with the standard registries and the
/// default tolerances.
///
/// The search is unbounded; it returns only when a difficult graph is found
/// or a classification fails.
pub fn search_for_difficult_graph(verbose: bool) -> Result<Option<Graph>, InpError> {
    let classifier = Classifier::from_preset(RegistryPreset::Standard, Tolerance::default());
    let options = SearchOptions {
        verbose,
        ..SearchOptions::default()
    };
    let outcome = run_search(
        &mut ConnectedGraphEnumerator::new(),
        &classifier,
        &options,
        &mut NullReporter,
    )?;
    Ok(outcome.map(|found| found.graph))
}

/// Whether `graph` is difficult under the standard registries.
pub fn is_difficult(graph: &Graph) -> Result<bool, InpError> {
    Classifier::from_preset(RegistryPreset::Standard, Tolerance::default()).is_difficult(graph)
}
