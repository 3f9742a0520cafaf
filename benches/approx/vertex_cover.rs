use criterion::{black_box, criterion_group, criterion_main, Criterion};

use np_algos::approx::{
    dual_fitting_vertex_cover, lp_rounding_vertex_cover, primal_dual_vertex_cover,
};

/// Ring of `n` vertices with a chord across the ring every `step` vertices.
fn ring_with_chords(n: usize, step: usize) -> Vec<(usize, usize)> {
    let mut edges: Vec<(usize, usize)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    for i in (0..n / 2).step_by(step) {
        edges.push((i, i + n / 2));
    }
    edges
}

fn bench_vertex_cover(c: &mut Criterion) {
    let n = 64;
    let edges = ring_with_chords(n, 4);

    let mut group = c.benchmark_group("vertex_cover");
    group.bench_function("lp_rounding", |b| {
        b.iter(|| lp_rounding_vertex_cover(black_box(&edges), black_box(n)).unwrap())
    });
    group.bench_function("primal_dual", |b| {
        b.iter(|| primal_dual_vertex_cover(black_box(&edges), black_box(n)).unwrap())
    });
    group.bench_function("dual_fitting", |b| {
        b.iter(|| dual_fitting_vertex_cover(black_box(&edges), black_box(n)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_vertex_cover);
criterion_main!(benches);
