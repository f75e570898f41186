use criterion::{black_box, criterion_group, criterion_main, Criterion};
use crt_core::noise::{hash21, time_bucket};
use glam::Vec2;

fn bench_hash(c: &mut Criterion) {
    c.bench_function("hash21 grid 256x256", |b| {
        b.iter(|| {
            let mut acc = 0.0f32;
            for y in 0..256 {
                for x in 0..256 {
                    let uv = Vec2::new(x as f32 / 256.0, y as f32 / 256.0);
                    acc += hash21(black_box(uv * time_bucket(1.25, 30.0)));
                }
            }
            acc
        })
    });
}

criterion_group!(benches, bench_hash);
criterion_main!(benches);
