use criterion::{black_box, criterion_group, criterion_main, Criterion};
use inp_core::rng::RngHandle;
use inp_core::tolerance::Tolerance;
use inp_graph::{petersen_graph, random_graph};
use inp_theory::{is_claw_free, Classifier, RegistryPreset};

fn classify_bench(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(29);
    let graphs: Vec<_> = (0..32)
        .map(|_| random_graph(8, 0.45, &mut rng).unwrap())
        .collect();
    let petersen = petersen_graph().unwrap();
    let matching = Classifier::from_preset(RegistryPreset::MatchingOnly, Tolerance::default());
    let standard = Classifier::from_preset(RegistryPreset::Standard, Tolerance::default());

    c.bench_function("claw_free_order_8", |b| {
        b.iter(|| {
            for graph in &graphs {
                black_box(is_claw_free(graph));
            }
        });
    });

    c.bench_function("classify_matching_only_order_8", |b| {
        b.iter(|| {
            for graph in &graphs {
                black_box(matching.classify(graph).unwrap());
            }
        });
    });

    c.bench_function("classify_standard_petersen", |b| {
        b.iter(|| black_box(standard.classify(&petersen).unwrap()));
    });
}

criterion_group!(benches, classify_bench);
criterion_main!(benches);
