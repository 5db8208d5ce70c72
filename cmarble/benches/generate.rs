use cmarble::{random::seeded, MazeGenerator};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

pub fn generate_small(c: &mut Criterion) {
    let generator = MazeGenerator::new(30, 30).unwrap();
    c.bench_function("dfs_30x30", |b| {
        let mut rng = seeded(0);
        b.iter(|| generator.generate(black_box(&mut rng)))
    });
}

pub fn generate_large(c: &mut Criterion) {
    let generator = MazeGenerator::new(200, 200).unwrap();
    c.bench_function("dfs_200x200", |b| {
        let mut rng = seeded(0);
        b.iter(|| generator.generate(black_box(&mut rng)))
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = generate_small, generate_large}
criterion_main!(benches);
