use std::collections::HashSet;

use inp_core::errors::InpError;
use inp_graph::{canonical_labeling, to_graph6, Graph};
use inp_search::{ConnectedGraphEnumerator, GraphSource};

fn drain(source: &mut dyn GraphSource, order: usize) -> Result<Vec<Graph>, InpError> {
    let mut graphs = Vec::new();
    while let Some(graph) = source.next_graph(order)? {
        graphs.push(graph);
    }
    Ok(graphs)
}

#[test]
fn counts_match_the_connected_graph_sequence() -> Result<(), InpError> {
    let mut enumerator = ConnectedGraphEnumerator::new();
    let counts: Vec<usize> = (1..=7)
        .map(|order| drain(&mut enumerator, order).map(|graphs| graphs.len()))
        .collect::<Result<_, _>>()?;
    assert_eq!(counts, vec![1, 1, 2, 6, 21, 112, 853]);
    assert!(!enumerator.is_exhausted());
    Ok(())
}

#[test]
fn graphs_are_connected_canonical_and_distinct() -> Result<(), InpError> {
    let mut enumerator = ConnectedGraphEnumerator::new();
    let graphs = drain(&mut enumerator, 6)?;
    assert_eq!(graphs.len(), 112);
    let mut certificates = HashSet::new();
    for graph in &graphs {
        assert_eq!(graph.order(), 6);
        assert!(graph.is_connected());
        let labeling = canonical_labeling(graph);
        assert_eq!(graph.adjacency_rows(), labeling.certificate.as_slice());
        assert!(certificates.insert(labeling.certificate));
    }
    Ok(())
}

#[test]
fn output_order_is_stable() -> Result<(), InpError> {
    let first = drain(&mut ConnectedGraphEnumerator::new(), 5)?;
    let second = drain(&mut ConnectedGraphEnumerator::new(), 5)?;
    let first: Vec<_> = first.iter().map(to_graph6).collect();
    let second: Vec<_> = second.iter().map(to_graph6).collect();
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn orders_only_move_forward() -> Result<(), InpError> {
    let mut enumerator = ConnectedGraphEnumerator::new();
    assert!(enumerator.next_graph(0)?.is_none());
    assert_eq!(drain(&mut enumerator, 4)?.len(), 6);
    assert_eq!(enumerator.order(), 4);
    let err = enumerator.next_graph(3).unwrap_err();
    assert_eq!(err.info().code, "order-regression");
    assert!(enumerator.next_graph(4)?.is_none());
    Ok(())
}
