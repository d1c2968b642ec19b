use inp_core::errors::InpError;
use inp_core::rng::RngHandle;
use inp_core::BoundKind;
use inp_graph::{
    complete_graph, cycle_graph, path_graph, petersen_graph, random_graph, star_graph, Graph,
};
use inp_theory::{lower, upper, Bound, BoundRegistry, Engines, GraphContext};
use proptest::prelude::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn value(bound: inp_theory::BoundFn, graph: &Graph) -> Option<f64> {
    let engines = Engines::default();
    bound(&GraphContext::new(graph, &engines)).unwrap()
}

#[test]
fn registry_contents() {
    let standard = BoundRegistry::standard();
    assert_eq!(standard.lower_names(), vec!["matching-lower"]);
    assert_eq!(standard.upper_names(), vec!["matching-upper", "lovasz-theta"]);
    let matching = BoundRegistry::matching_only();
    assert_eq!(matching.upper_names(), vec!["matching-upper"]);
    let survey = BoundRegistry::survey();
    assert_eq!(survey.lower().len(), 7);
    assert_eq!(survey.upper().len(), 10);
    assert!(survey.upper().iter().all(|bound| bound.kind == BoundKind::Upper));
}

#[test]
fn folds_seed_with_trivial_bounds() -> Result<(), InpError> {
    let engines = Engines::default();
    let empty = BoundRegistry::empty();
    let graph = Graph::empty(5)?;
    let ctx = GraphContext::new(&graph, &engines);
    let low = empty.lower_bound(&ctx)?;
    let high = empty.upper_bound(&ctx)?;
    assert_eq!((low.value, low.source), (1.0, None));
    assert_eq!((high.value, high.source), (5.0, None));

    let nothing = Graph::empty(0)?;
    let ctx = GraphContext::new(&nothing, &engines);
    assert_eq!(empty.lower_bound(&ctx)?.value, 0.0);
    assert_eq!(empty.upper_bound(&ctx)?.value, 0.0);
    Ok(())
}

#[test]
fn folds_report_their_source() -> Result<(), InpError> {
    let engines = Engines::default();
    let c5 = cycle_graph(5)?;
    let ctx = GraphContext::new(&c5, &engines);
    let matching = BoundRegistry::matching_only();
    assert_eq!(matching.lower_bound(&ctx)?.source, None);
    let high = matching.upper_bound(&ctx)?;
    assert_eq!((high.value, high.source.as_deref()), (3.0, Some("matching-upper")));

    let high = BoundRegistry::standard().upper_bound(&ctx)?;
    assert!((high.value - 5f64.sqrt()).abs() < 1e-6);
    assert_eq!(high.source.as_deref(), Some("lovasz-theta"));

    let empty = Graph::empty(4)?;
    let ctx = GraphContext::new(&empty, &engines);
    let low = matching.lower_bound(&ctx)?;
    assert_eq!((low.value, low.source.as_deref()), (4.0, Some("matching-lower")));
    Ok(())
}

#[test]
fn lower_bound_values() -> Result<(), InpError> {
    let k3 = complete_graph(3)?;
    let c5 = cycle_graph(5)?;
    let p3 = path_graph(3)?;
    let star = star_graph(3)?;
    assert_eq!(value(lower::matching_lower, &p3), Some(1.0));
    assert!(close(value(lower::caro_wei, &k3).unwrap_or(0.0), 1.0));
    assert!(close(value(lower::average_degree, &c5).unwrap_or(0.0), 5.0 / 3.0));
    assert_eq!(value(lower::residue, &star), Some(3.0));
    assert_eq!(value(lower::residue, &k3), Some(1.0));
    assert!((value(lower::wilf, &k3).unwrap_or(0.0) - 1.0).abs() < 1e-9);
    assert_eq!(value(lower::hansen_zheng_lower, &c5), Some(2.0));
    let harant = value(lower::harant, &p3).unwrap_or(0.0);
    assert!((harant - 0.5 * (8.0 - 28f64.sqrt())).abs() < 1e-12);
    assert_eq!(value(lower::harant, &Graph::new(3, &[(0, 1)])?), None);
    assert_eq!(value(lower::average_degree, &Graph::empty(0)?), None);
    Ok(())
}

#[test]
fn upper_bound_values() -> Result<(), InpError> {
    let k3 = complete_graph(3)?;
    let c4 = cycle_graph(4)?;
    let c5 = cycle_graph(5)?;
    let p4 = path_graph(4)?;
    let star = star_graph(3)?;
    assert_eq!(value(upper::matching_upper, &c5), Some(3.0));
    assert!((value(upper::fractional_alpha, &c5).unwrap_or(0.0) - 2.5).abs() < 1e-9);
    assert_eq!(value(upper::kwok, &c5), Some(2.5));
    assert_eq!(value(upper::kwok, &Graph::empty(3)?), None);
    assert_eq!(value(upper::hansen_zheng_upper, &k3), Some(1.0));
    assert_eq!(value(upper::min_degree, &k3), Some(1.0));
    assert_eq!(value(upper::cvetkovic, &c4), Some(3.0));
    assert_eq!(value(upper::annihilation, &k3), Some(1.0));
    assert_eq!(value(upper::annihilation, &star), Some(3.0));
    assert_eq!(value(upper::borg, &c5), Some(3.0));
    assert_eq!(value(upper::borg, &Graph::empty(2)?), None);
    assert_eq!(value(upper::cut_vertices, &p4), Some(2.5));
    assert_eq!(value(upper::cut_vertices, &Graph::new(4, &[(0, 1), (2, 3)])?), None);
    assert!((value(upper::lovasz_theta, &petersen_graph()?).unwrap_or(0.0) - 4.0).abs() < 1e-6);
    Ok(())
}

#[test]
fn evaluate_all_lists_lower_then_upper() -> Result<(), InpError> {
    let engines = Engines::default();
    let graph = path_graph(5)?;
    let ctx = GraphContext::new(&graph, &engines);
    let rows = BoundRegistry::survey().evaluate_all(&ctx)?;
    assert_eq!(rows.len(), 17);
    assert_eq!(rows[0].name, "matching-lower");
    assert_eq!(rows[0].kind, BoundKind::Lower);
    assert_eq!(rows[7].name, "matching-upper");
    assert!(rows.iter().all(|row| row.value.is_some()));
    Ok(())
}

fn not_a_number(_: &GraphContext<'_>) -> Result<Option<f64>, InpError> {
    Ok(Some(f64::NAN))
}

#[test]
fn registration_rules() -> Result<(), InpError> {
    let mut registry = BoundRegistry::matching_only();
    let err = registry
        .register(Bound::upper("matching-upper", upper::kwok))
        .unwrap_err();
    assert_eq!(err.info().code, "duplicate-entry");
    // Names are scoped per direction.
    registry.register(Bound::lower("matching-upper", lower::caro_wei))?;
    registry.register(Bound::upper("broken", not_a_number))?;

    let engines = Engines::default();
    let graph = cycle_graph(5)?;
    let err = registry
        .upper_bound(&GraphContext::new(&graph, &engines))
        .unwrap_err();
    assert!(matches!(err, InpError::Registry(_)));
    assert_eq!(err.info().code, "bound-not-finite");
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn every_survey_bound_brackets_alpha(seed in any::<u64>(), order in 1usize..9, p in 0.1f64..0.9) {
        let mut rng = RngHandle::from_seed(seed);
        let graph = random_graph(order, p, &mut rng).unwrap();
        let alpha = graph.independence_number() as f64;
        let engines = Engines::default();
        let ctx = GraphContext::new(&graph, &engines);
        let registry = BoundRegistry::survey();
        for row in registry.evaluate_all(&ctx).unwrap() {
            if let Some(value) = row.value {
                match row.kind {
                    BoundKind::Lower => prop_assert!(value <= alpha + 1e-6, "{} = {} > {}", row.name, value, alpha),
                    BoundKind::Upper => prop_assert!(value >= alpha - 1e-6, "{} = {} < {}", row.name, value, alpha),
                }
            }
        }
        prop_assert!(registry.lower_bound(&ctx).unwrap().value <= alpha + 1e-6);
        prop_assert!(registry.upper_bound(&ctx).unwrap().value >= alpha - 1e-6);
    }
}
