use criterion::{black_box, criterion_group, criterion_main, Criterion};
use inp_core::tolerance::Tolerance;
use inp_search::{run_search, ConnectedGraphEnumerator, GraphSource, NullReporter, SearchOptions};
use inp_theory::{Classifier, RegistryPreset};

fn search_bench(c: &mut Criterion) {
    let classifier = Classifier::from_preset(RegistryPreset::MatchingOnly, Tolerance::default());

    c.bench_function("enumerate_connected_order_6", |b| {
        b.iter(|| {
            let mut enumerator = ConnectedGraphEnumerator::new();
            let mut count = 0usize;
            while enumerator.next_graph(6).unwrap().is_some() {
                count += 1;
            }
            black_box(count)
        });
    });

    let options = SearchOptions {
        max_order: Some(6),
        ..SearchOptions::default()
    };
    c.bench_function("search_matching_only_to_order_6", |b| {
        b.iter(|| {
            black_box(
                run_search(
                    &mut ConnectedGraphEnumerator::new(),
                    &classifier,
                    &options,
                    &mut NullReporter,
                )
                .unwrap(),
            )
        });
    });
}

criterion_group!(benches, search_bench);
criterion_main!(benches);
