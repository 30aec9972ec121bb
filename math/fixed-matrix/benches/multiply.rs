use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fixed_matrix::*;

fn criterion_benchmark(c: &mut Criterion) {
  let a = Mat4x4::<f32>::from_fn(|x, y| (x * 4 + y) as f32 * 0.25);
  let b = Mat4x4::<f32>::identity() * 2.;

  c.bench_function("4x4 f32 product", |bench| {
    bench.iter(|| black_box(&a) * black_box(&b))
  });

  let left = FixedMatrix::<f64, 16, 24>::from_fn(|x, y| (x + y) as f64);
  let right = FixedMatrix::<f64, 8, 16>::splat(0.5);

  c.bench_function("16x24 by 8x16 f64 product", |bench| {
    bench.iter(|| black_box(&left) * black_box(&right))
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
