use inp_core::errors::InpError;
use inp_core::rng::RngHandle;
use inp_core::tolerance::SdpSettings;
use inp_graph::{complete_graph, cycle_graph, petersen_graph, random_graph, Graph};
use inp_solve::{lovasz_theta, theta_problem, BarrierSdp, SemidefiniteSolver};
use proptest::prelude::*;

fn theta(graph: &Graph) -> f64 {
    lovasz_theta(graph, &BarrierSdp::default()).unwrap()
}

#[test]
fn reference_values() {
    assert!((theta(&Graph::empty(2).unwrap()) - 2.0).abs() < 1e-3);
    assert!((theta(&complete_graph(3).unwrap()) - 1.0).abs() < 1e-3);
    assert!((theta(&cycle_graph(5).unwrap()) - 5f64.sqrt()).abs() < 1e-3);
    assert!((theta(&petersen_graph().unwrap()) - 4.0).abs() < 1e-3);
}

#[test]
fn odd_cycles_match_the_closed_form() {
    for n in [7usize, 9] {
        let c = (std::f64::consts::PI / n as f64).cos();
        let expected = n as f64 * c / (1.0 + c);
        assert!((theta(&cycle_graph(n).unwrap()) - expected).abs() < 1e-6);
    }
}

#[test]
fn small_orders_bypass_the_solver() {
    let failing = BarrierSdp::new(SdpSettings {
        max_iterations: 0,
        ..SdpSettings::default()
    });
    assert_eq!(lovasz_theta(&Graph::empty(1).unwrap(), &failing).unwrap(), 1.0);
    assert_eq!(lovasz_theta(&Graph::empty(0).unwrap(), &failing).unwrap(), 0.0);
}

#[test]
fn non_convergence_is_a_solver_failure() {
    let failing = BarrierSdp::new(SdpSettings {
        max_iterations: 2,
        ..SdpSettings::default()
    });
    match lovasz_theta(&cycle_graph(5).unwrap(), &failing) {
        Err(InpError::Solver(info)) => {
            assert_eq!(info.code, "sdp-not-converged");
            assert_eq!(info.context.get("graph-order").map(String::as_str), Some("5"));
        }
        other => panic!("expected solver failure, got {other:?}"),
    }
}

#[test]
fn rejects_an_infeasible_dual_start() {
    let mut problem = theta_problem(&cycle_graph(5).unwrap());
    problem.dual_start[0] = 1.0;
    let err = BarrierSdp::default().solve(&problem).unwrap_err();
    assert_eq!(err.info().code, "sdp-infeasible-start");
}

#[test]
fn solution_reports_a_certified_gap() {
    let solution = BarrierSdp::default()
        .solve(&theta_problem(&petersen_graph().unwrap()))
        .unwrap();
    assert!(solution.gap_bound <= 1e-7 * (1.0 + solution.objective));
    assert!(solution.newton_steps > 0);
    assert!(solution.objective >= 4.0 - 1e-9);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn theta_sits_between_alpha_and_the_fractional_bound(seed in any::<u64>(), order in 2usize..9, p in 0.0f64..1.0) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = random_graph(order, p, &mut rng).unwrap();
        let value = theta(&graph);
        prop_assert!(value + 1e-9 >= graph.independence_number() as f64);
        prop_assert!(value <= order as f64 + 1e-6);
    }
}
