use inp_core::rng::RngHandle;
use inp_graph::{
    canonical_form, canonical_hash, canonical_labeling, cycle_graph, is_isomorphic, path_graph,
    petersen_graph, random_graph, Graph,
};
use proptest::prelude::*;
use rand::seq::SliceRandom;

fn shuffled(graph: &Graph, rng: &mut RngHandle) -> Graph {
    let mut perm: Vec<usize> = (0..graph.order()).collect();
    perm.shuffle(rng);
    graph.permuted(&perm)
}

#[test]
fn vertex_transitive_graphs_are_stable_under_relabelling() {
    let mut rng = RngHandle::from_seed(11);
    let petersen = petersen_graph().unwrap();
    let reference = canonical_form(&petersen);
    for _ in 0..10 {
        assert_eq!(canonical_form(&shuffled(&petersen, &mut rng)), reference);
    }
    assert!(canonical_labeling(&petersen).automorphisms_found > 0);
}

#[test]
fn distinguishes_non_isomorphic_graphs() {
    let c6 = cycle_graph(6).unwrap();
    let two_triangles = Graph::new(6, &[(0, 1), (1, 2), (0, 2), (3, 4), (4, 5), (3, 5)]).unwrap();
    assert!(!is_isomorphic(&c6, &two_triangles));
    assert_ne!(canonical_hash(&c6), canonical_hash(&two_triangles));
    assert!(is_isomorphic(&path_graph(4).unwrap(), &Graph::new(4, &[(2, 0), (0, 3), (3, 1)]).unwrap()));
}

#[test]
fn canonical_form_of_empty_graph() {
    let graph = Graph::empty(0).unwrap();
    assert_eq!(canonical_form(&graph), graph);
    assert_eq!(canonical_hash(&graph).len(), 64);
}

proptest! {
    #[test]
    fn canonical_form_ignores_vertex_labels(seed in any::<u64>(), order in 1usize..12, p in 0.0f64..1.0) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = random_graph(order, p, &mut rng).unwrap();
        let relabelled = shuffled(&graph, &mut rng);
        let canonical = canonical_form(&graph);
        prop_assert_eq!(&canonical, &canonical_form(&relabelled));
        prop_assert_eq!(canonical.degree_sequence(), graph.degree_sequence());
        prop_assert!(is_isomorphic(&graph, &relabelled));
        prop_assert_eq!(canonical_hash(&graph), canonical_hash(&relabelled));
    }
}
