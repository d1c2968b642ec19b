use inp_core::errors::InpError;
use inp_graph::{
    complete_graph, cycle_graph, path_graph, petersen_graph, star_graph, Graph, MAX_ORDER,
};

fn graph_code(result: Result<Graph, InpError>) -> String {
    match result {
        Err(InpError::Graph(info)) => info.code,
        other => panic!("expected a graph error, got {other:?}"),
    }
}

#[test]
fn rejects_malformed_edge_lists() {
    assert_eq!(graph_code(Graph::new(3, &[(0, 3)])), "vertex-out-of-range");
    assert_eq!(graph_code(Graph::new(3, &[(1, 1)])), "self-loop");
    assert_eq!(graph_code(Graph::new(3, &[(0, 1), (1, 0)])), "duplicate-edge");
    assert_eq!(graph_code(Graph::empty(MAX_ORDER + 1)), "order-limit");
}

#[test]
fn basic_queries_match_the_edge_list() {
    let graph = Graph::new(4, &[(2, 0), (0, 1), (1, 2), (2, 3)]).unwrap();
    assert_eq!(graph.order(), 4);
    assert_eq!(graph.size(), 4);
    assert_eq!(graph.edges(), &[(0, 1), (0, 2), (1, 2), (2, 3)]);
    assert!(graph.has_edge(3, 2));
    assert!(!graph.has_edge(0, 3));
    assert_eq!(graph.neighbors(2), vec![0, 1, 3]);
    assert_eq!(graph.degrees(), &[2, 2, 3, 1]);
    assert_eq!(graph.degree_sequence(), vec![3, 2, 2, 1]);
    assert_eq!(graph.max_degree(), 3);
    assert_eq!(graph.min_degree(), 1);
    assert!((graph.average_degree() - 2.0).abs() < 1e-12);
}

#[test]
fn set_predicates_and_neighbourhoods() {
    let graph = Graph::new(4, &[(0, 1), (0, 2), (1, 2), (2, 3)]).unwrap();
    assert!(graph.is_clique(0b0111));
    assert!(!graph.is_clique(0b1011));
    assert!(graph.is_independent(0b1001));
    assert!(graph.is_independent(0));
    assert_eq!(graph.open_neighborhood(0b1000), 0b0100);
    assert_eq!(graph.closed_neighborhood(0b1000), 0b1100);
}

#[test]
fn subgraphs_and_complements() {
    let cycle = cycle_graph(5).unwrap();
    let path = cycle.delete_vertices(1 << 4);
    assert_eq!(path, path_graph(4).unwrap());

    let induced = cycle.induced_subgraph(&[0, 2, 4]).unwrap();
    assert_eq!(induced.size(), 1);
    assert!(induced.has_edge(0, 2));
    assert!(cycle.induced_subgraph(&[0, 0]).is_err());

    let complement = cycle.complement();
    assert_eq!(complement.size(), 5);
    assert_eq!(complement.complement(), cycle);
}

#[test]
fn connectivity_bipartiteness_and_cut_vertices() {
    assert!(Graph::empty(0).unwrap().is_connected());
    assert!(Graph::empty(1).unwrap().is_connected());
    assert!(!Graph::empty(2).unwrap().is_connected());
    assert!(path_graph(5).unwrap().is_bipartite());
    assert!(!cycle_graph(5).unwrap().is_bipartite());
    assert!(cycle_graph(6).unwrap().is_bipartite());
    assert_eq!(path_graph(5).unwrap().cut_vertices(), vec![1, 2, 3]);
    assert_eq!(star_graph(3).unwrap().cut_vertices(), vec![0]);
    assert!(cycle_graph(6).unwrap().cut_vertices().is_empty());
}

#[test]
fn bipartite_double_cover_doubles_edges() {
    let triangle = complete_graph(3).unwrap();
    let cover = triangle.bipartite_double_cover().unwrap();
    assert_eq!(cover.order(), 6);
    assert_eq!(cover.size(), 6);
    assert!(cover.is_bipartite());
    assert!(cover.has_edge(0, 4));
    assert!(!cover.has_edge(0, 3));
    assert!(Graph::empty(33).unwrap().bipartite_double_cover().is_err());
}

#[test]
fn independence_oracle_on_named_graphs() {
    assert_eq!(Graph::empty(0).unwrap().independence_number(), 0);
    assert_eq!(complete_graph(5).unwrap().independence_number(), 1);
    assert_eq!(cycle_graph(5).unwrap().independence_number(), 2);
    assert_eq!(path_graph(4).unwrap().independence_number(), 2);
    assert_eq!(star_graph(4).unwrap().independence_number(), 4);
    assert_eq!(petersen_graph().unwrap().independence_number(), 4);
}

#[test]
fn named_families_have_expected_shapes() {
    let petersen = petersen_graph().unwrap();
    assert_eq!((petersen.order(), petersen.size()), (10, 15));
    assert!(petersen.degrees().iter().all(|&d| d == 3));
    assert_eq!(star_graph(4).unwrap().order(), 5);
    assert_eq!(complete_graph(4).unwrap().size(), 6);
    assert!(cycle_graph(2).is_err());
}
