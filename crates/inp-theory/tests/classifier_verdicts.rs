use inp_core::errors::InpError;
use inp_core::tolerance::{SdpSettings, Tolerance};
use inp_graph::{complete_graph, cycle_graph, from_graph6, path_graph, petersen_graph, Graph};
use inp_theory::{
    BoundRegistry, Bracket, Classifier, PropertyRegistry, RegistryPreset, Resolution, Verdict,
};

fn preset(preset: RegistryPreset) -> Classifier {
    Classifier::from_preset(preset, Tolerance::default())
}

#[test]
fn tiny_graphs_are_never_difficult() -> Result<(), InpError> {
    let classifier = preset(RegistryPreset::Standard);
    for graph in [
        Graph::empty(0)?,
        Graph::empty(1)?,
        Graph::empty(2)?,
        Graph::new(2, &[(0, 1)])?,
        path_graph(3)?,
    ] {
        assert!(!classifier.is_difficult(&graph)?);
    }
    Ok(())
}

#[test]
fn property_verdicts_name_the_property() -> Result<(), InpError> {
    let classifier = preset(RegistryPreset::Standard);
    assert_eq!(
        classifier.classify(&complete_graph(3)?)?,
        Verdict::NotDifficult {
            resolution: Resolution::Property {
                name: "dominating-vertex".to_string()
            }
        }
    );
    let verdict = classifier.classify(&cycle_graph(5)?)?;
    assert!(matches!(
        verdict,
        Verdict::NotDifficult { resolution: Resolution::Property { ref name } } if name == "claw-free"
    ));
    assert_eq!(verdict.bracket(), None);
    Ok(())
}

#[test]
fn petersen_is_difficult() -> Result<(), InpError> {
    let petersen = petersen_graph()?;
    let verdict = preset(RegistryPreset::Standard).classify(&petersen)?;
    assert_eq!(
        verdict,
        Verdict::Difficult {
            bracket: Bracket {
                lower: 1,
                upper: 4,
                lower_source: None,
                upper_source: Some("lovasz-theta".to_string()),
            }
        }
    );
    let verdict = preset(RegistryPreset::MatchingOnly).classify(&petersen)?;
    let bracket = verdict.bracket().cloned().unwrap();
    assert_eq!((bracket.lower, bracket.upper), (1, 5));
    Ok(())
}

#[test]
fn smallest_matching_only_fixture() -> Result<(), InpError> {
    let graph = from_graph6("GhoGKc")?;
    let verdict = preset(RegistryPreset::MatchingOnly).classify(&graph)?;
    assert!(verdict.is_difficult());
    let bracket = verdict.bracket().unwrap();
    assert_eq!((bracket.lower, bracket.upper), (1, 4));
    assert_eq!(bracket.upper_source.as_deref(), Some("matching-upper"));
    Ok(())
}

#[test]
fn coinciding_bounds_resolve_without_properties() -> Result<(), InpError> {
    let classifier = Classifier::new(
        PropertyRegistry::empty(),
        BoundRegistry::standard(),
        Tolerance::default(),
    );
    let verdict = classifier.classify(&complete_graph(3)?)?;
    let bracket = match verdict {
        Verdict::NotDifficult {
            resolution: Resolution::Bounds { bracket },
        } => bracket,
        other => panic!("expected a bounds resolution, got {other:?}"),
    };
    assert_eq!((bracket.lower, bracket.upper), (1, 1));
    assert_eq!(bracket.upper_source.as_deref(), Some("lovasz-theta"));
    Ok(())
}

#[test]
fn classification_is_idempotent() -> Result<(), InpError> {
    let classifier = preset(RegistryPreset::Standard);
    for graph in [petersen_graph()?, from_graph6("GhoGKc")?, cycle_graph(7)?] {
        assert_eq!(classifier.classify(&graph)?, classifier.classify(&graph)?);
    }
    Ok(())
}

#[test]
fn solver_failures_abort_classification() -> Result<(), InpError> {
    let tolerance = Tolerance {
        sdp: SdpSettings {
            max_iterations: 2,
            ..SdpSettings::default()
        },
        ..Tolerance::default()
    };
    let classifier =
        Classifier::new(PropertyRegistry::empty(), BoundRegistry::standard(), tolerance);
    let err = classifier.classify(&cycle_graph(5)?).unwrap_err();
    assert!(err.is_fatal_for_classification());
    assert_eq!(err.info().code, "sdp-not-converged");
    Ok(())
}

#[test]
fn provenance_tracks_registry_contents() {
    let standard = preset(RegistryPreset::Standard).provenance();
    let matching = preset(RegistryPreset::MatchingOnly).provenance();
    assert_eq!(standard.properties, matching.properties);
    assert_eq!(standard.upper_bounds, vec!["matching-upper", "lovasz-theta"]);
    assert_eq!(standard.fingerprint.len(), 64);
    assert_ne!(standard.fingerprint, matching.fingerprint);
    assert_eq!(standard, preset(RegistryPreset::Standard).provenance());
    assert!(standard.tool_versions.contains_key("inp-theory"));
}

#[test]
fn presets_parse_and_serialize() {
    assert_eq!("survey".parse::<RegistryPreset>().unwrap(), RegistryPreset::Survey);
    assert_eq!(
        "matching-only".parse::<RegistryPreset>().unwrap(),
        RegistryPreset::MatchingOnly
    );
    let err = "bogus".parse::<RegistryPreset>().unwrap_err();
    assert_eq!(err.info().code, "unknown-preset");
    assert_eq!(
        serde_json::to_string(&RegistryPreset::MatchingOnly).unwrap(),
        "\"matching-only\""
    );
    assert_eq!(RegistryPreset::default().to_string(), "standard");
}

#[test]
fn verdicts_serialize_with_a_tag() -> Result<(), InpError> {
    let verdict = preset(RegistryPreset::Standard).classify(&petersen_graph()?)?;
    let json = serde_json::to_value(&verdict).unwrap();
    assert_eq!(json["verdict"], "difficult");
    assert_eq!(json["bracket"]["upper"], 4);
    let back: Verdict = serde_json::from_value(json).unwrap();
    assert_eq!(back, verdict);
    Ok(())
}
