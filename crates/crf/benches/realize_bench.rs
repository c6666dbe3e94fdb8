//! Criterion benchmarks for reference meshes and the hull they go through.
//! Focus: one solid per family, from 4 to 120 vertices.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use crf::mesh::{is_congruent, Polyhedron};
use crf::realize::realize;
use crf::specs::registry;

const SOLIDS: [&str; 6] = [
    "tetrahedron",
    "pentagonal rotunda",
    "snub cube",
    "parabiaugmented dodecahedron",
    "sphenocorona",
    "truncated icosidodecahedron",
];

fn bench_realize(c: &mut Criterion) {
    let mut group = c.benchmark_group("realize");
    for name in SOLIDS {
        let spec = registry().resolve(name).expect("known solid");
        // Realizations are cached; the hull is the uncached part.
        let points = realize(&spec).expect("realizes").vertices().to_vec();
        group.bench_with_input(BenchmarkId::new("hull", name), &points, |b, pts| {
            b.iter(|| Polyhedron::from_points_hull(pts).expect("hull"))
        });
        group.bench_with_input(BenchmarkId::new("cached", name), &spec, |b, spec| {
            b.iter(|| realize(spec).expect("realizes"))
        });
    }
    group.finish();
}

fn bench_congruence(c: &mut Criterion) {
    let mut group = c.benchmark_group("congruence");
    for name in SOLIDS {
        let spec = registry().resolve(name).expect("known solid");
        let mesh = realize(&spec).expect("realizes");
        let mirrored = mesh.mirror();
        group.bench_with_input(BenchmarkId::new("mirror", name), &(mesh, mirrored), |b, (m, r)| {
            b.iter(|| is_congruent(m, r, true))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_realize, bench_congruence);
criterion_main!(benches);
