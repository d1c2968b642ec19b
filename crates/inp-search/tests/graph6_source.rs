use std::io::Cursor;

use inp_core::errors::InpError;
use inp_graph::to_graph6;
use inp_search::{Graph6Source, GraphSource};

#[test]
fn lines_are_served_by_order() -> Result<(), InpError> {
    let mut source = Graph6Source::new(Cursor::new("@\nA_\n\n>>graph6<<Bw\nBg\n"));
    let k1 = source.next_graph(1)?.map(|graph| graph.order());
    assert_eq!(k1, Some(1));
    assert!(source.next_graph(1)?.is_none());
    assert!(!source.is_exhausted());
    assert_eq!(source.next_graph(2)?.map(|graph| graph.size()), Some(1));
    assert!(source.next_graph(2)?.is_none());
    let triangle = source.next_graph(3)?.map(|graph| to_graph6(&graph));
    assert_eq!(triangle.as_deref(), Some("Bw"));
    let path = source.next_graph(3)?.map(|graph| to_graph6(&graph));
    assert_eq!(path.as_deref(), Some("Bg"));
    assert!(source.next_graph(3)?.is_none());
    assert!(source.is_exhausted());
    Ok(())
}

#[test]
fn skipped_orders_yield_nothing() -> Result<(), InpError> {
    let mut source = Graph6Source::new(Cursor::new("IheA@GUAo\n"));
    for order in 1..10 {
        assert!(source.next_graph(order)?.is_none());
        assert!(!source.is_exhausted());
    }
    assert_eq!(source.next_graph(10)?.map(|graph| graph.size()), Some(15));
    assert!(source.next_graph(10)?.is_none());
    assert!(source.is_exhausted());
    Ok(())
}

#[test]
fn unsorted_input_is_rejected() {
    let mut source = Graph6Source::new(Cursor::new("Bw\nA_\n"));
    assert!(source.next_graph(3).unwrap().is_some());
    let err = source.next_graph(3).unwrap_err();
    assert!(matches!(err, InpError::Serde(_)));
    assert_eq!(err.info().code, "unsorted-input");
    assert_eq!(err.info().context.get("line").map(String::as_str), Some("2"));
}

#[test]
fn malformed_lines_carry_their_line_number() {
    let mut source = Graph6Source::new(Cursor::new("@\nB!\n"));
    assert!(source.next_graph(1).unwrap().is_some());
    let err = source.next_graph(1).unwrap_err();
    assert_eq!(err.info().code, "graph6-invalid");
    assert_eq!(err.info().context.get("line").map(String::as_str), Some("2"));
}
