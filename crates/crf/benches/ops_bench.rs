//! Criterion benchmarks for operations: graph lookups and full applications.

use criterion::{criterion_group, criterion_main, Criterion};
use crf::mesh::CapKind;
use crf::ops::{
    AugmentOptions, CapOptions, ExpandOptions, FacetOptions, Operation, OperationInfo, Solid, AUGMENT,
    EXPAND, GYRATE, TRUNCATE,
};

fn solid(name: &str) -> Solid {
    Solid::from_name(name).expect("known solid")
}

fn bench_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairs");
    let cube = solid("cube");
    let ico = solid("icosahedron");
    group.bench_function("can_apply_all/cube", |b| {
        b.iter(|| crf::ops::operations().iter().filter(|op| op.can_apply_to(&cube)).count())
    });
    group.bench_function("truncate/cube", |b| {
        b.iter(|| TRUNCATE.apply(&cube, &FacetOptions::default()).expect("truncates"))
    });
    group.bench_function("expand/icosahedron", |b| {
        b.iter(|| EXPAND.apply(&ico, &ExpandOptions::default()).expect("expands"))
    });
    group.finish();
}

fn bench_cut_paste(c: &mut Criterion) {
    let mut group = c.benchmark_group("cut_paste");
    group.sample_size(10);
    let cube = solid("cube");
    let rid = solid("rhombicosidodecahedron");
    let pyramid = AugmentOptions {
        face: Some(0),
        using: Some(CapKind::Pyramid),
        gyrate: None,
    };
    group.bench_function("augment/cube", |b| {
        b.iter(|| AUGMENT.apply(&cube, &pyramid).expect("augments"))
    });
    let cupola: CapOptions = *GYRATE.all_option_combos(&rid).first().expect("a cupola");
    group.bench_function("gyrate/rhombicosidodecahedron", |b| {
        b.iter(|| GYRATE.apply(&rid, &cupola).expect("gyrates"))
    });
    group.finish();
}

criterion_group!(benches, bench_pairs, bench_cut_paste);
criterion_main!(benches);
