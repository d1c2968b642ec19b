use inp_graph::{complete_graph, cycle_graph, petersen_graph, Graph};
use inp_solve::{adjacency_eigenvalues, inertia, inertia_of, spectral_radius, Inertia};

#[test]
fn complete_graph_spectrum() {
    let eigenvalues = adjacency_eigenvalues(&complete_graph(3).unwrap());
    let expected = [2.0, -1.0, -1.0];
    for (value, want) in eigenvalues.iter().zip(expected) {
        assert!((value - want).abs() < 1e-9);
    }
}

#[test]
fn four_cycle_inertia() {
    let counts = inertia(&cycle_graph(4).unwrap(), 1e-8);
    assert_eq!(
        counts,
        Inertia {
            positive: 1,
            negative: 1,
            zero: 2
        }
    );
    assert!((spectral_radius(&cycle_graph(4).unwrap()) - 2.0).abs() < 1e-9);
}

#[test]
fn empty_graphs() {
    assert!(adjacency_eigenvalues(&Graph::empty(0).unwrap()).is_empty());
    assert_eq!(spectral_radius(&Graph::empty(0).unwrap()), 0.0);
    assert_eq!(inertia(&Graph::empty(3).unwrap(), 1e-8).zero, 3);
}

#[test]
fn slice_inertia_respects_the_zero_threshold() {
    let counts = inertia_of(&[2.0, 1e-10, -3e-9, -1.5], 1e-8);
    assert_eq!(
        counts,
        Inertia {
            positive: 1,
            negative: 1,
            zero: 2
        }
    );
    let petersen = petersen_graph().unwrap();
    assert_eq!(inertia_of(&adjacency_eigenvalues(&petersen), 1e-8), inertia(&petersen, 1e-8));
}
