use inp_core::rng::RngHandle;
use inp_graph::{canonical_form, petersen_graph, random_graph, to_graph6};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn canonical_bench(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(7);
    let graphs: Vec<_> = (0..64)
        .map(|_| random_graph(12, 0.4, &mut rng).unwrap())
        .collect();
    let petersen = petersen_graph().unwrap();

    c.bench_function("canonical_random_order_12", |b| {
        b.iter(|| {
            for graph in &graphs {
                black_box(canonical_form(graph));
            }
        });
    });

    c.bench_function("canonical_petersen", |b| {
        b.iter(|| black_box(canonical_form(&petersen)));
    });

    c.bench_function("graph6_encode", |b| {
        b.iter(|| {
            for graph in &graphs {
                black_box(to_graph6(graph));
            }
        });
    });
}

criterion_group!(benches, canonical_bench);
criterion_main!(benches);
