#![deny(missing_docs)]

//! Graph sources, the search for the first difficult graph and the
//! reporting of what it finds.

mod driver;
pub mod report;
pub mod source;

pub use driver::{
    is_difficult, run_search, search_for_difficult_graph, SearchOptions, SearchOutcome,
    SearchState,
};
pub use report::{DifficultGraphRecord, JsonLinesReporter, MemoryReporter, NullReporter, Reporter};
pub use source::{ConnectedGraphEnumerator, Graph6Source, GraphSource};
