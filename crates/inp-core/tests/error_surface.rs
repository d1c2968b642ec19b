use inp_core::errors::{ErrorInfo, InpError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("order", 5)
        .with_context("reason", "example")
}

#[test]
fn graph_error_surface() {
    let err = InpError::Graph(sample_info("self-loop", "loop at vertex 3"));
    assert_eq!(err.info().code, "self-loop");
    assert!(err.info().context.contains_key("order"));
    assert!(err.is_fatal_for_classification());
}

#[test]
fn solver_error_surface() {
    let err = InpError::solver("lp-iteration-limit", "pivot cap reached").with_context("pivots", 10);
    assert_eq!(err.info().code, "lp-iteration-limit");
    assert_eq!(err.info().context.get("pivots").map(String::as_str), Some("10"));
    assert!(err.is_fatal_for_classification());
}

#[test]
fn report_and_registry_errors_are_not_classification_failures() {
    let report = InpError::Report(sample_info("report-write", "disk full"));
    let registry = InpError::Registry(sample_info("unknown-preset", "no such preset"));
    assert!(!report.is_fatal_for_classification());
    assert!(!registry.is_fatal_for_classification());
}

#[test]
fn display_includes_context_and_hint() {
    let err = InpError::Serde(
        ErrorInfo::new("graph6-invalid", "truncated payload")
            .with_context("input", "B")
            .with_hint("check the generator output"),
    );
    let rendered = err.to_string();
    assert!(rendered.starts_with("serde error: truncated payload (code: graph6-invalid)"));
    assert!(rendered.contains("input=B"));
    assert!(rendered.contains("hint: check the generator output"));
}

#[test]
fn errors_serialize_with_family_tag() {
    let err = InpError::graph("duplicate-edge", "edge listed twice");
    let json = serde_json::to_value(&err).unwrap();
    assert_eq!(json["family"], "Graph");
    assert_eq!(json["detail"]["code"], "duplicate-edge");
    let back: InpError = serde_json::from_value(json).unwrap();
    assert_eq!(back, err);
}
