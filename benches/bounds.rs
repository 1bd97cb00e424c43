use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use polypath::Polygon;

fn build(n: i32) -> Polygon {
  let mut polygon = Polygon::with_capacity(n as usize).unwrap();
  for i in 0..n {
    polygon.add_point(i, (i * 7919) % 1000).unwrap();
  }
  polygon
}

pub fn criterion_benchmark(c: &mut Criterion) {
  let small = build(20);
  c.bench_function("Polygon::close(20)", |b| {
    b.iter_batched(|| small.clone(), |mut p| p.close(), BatchSize::SmallInput)
  });
  let large = build(1000);
  c.bench_function("Polygon::close(1000)", |b| {
    b.iter_batched(|| large.clone(), |mut p| p.close(), BatchSize::SmallInput)
  });
  let mut closed = build(1000);
  closed.close();
  c.bench_function("Polygon::contains", |b| b.iter(|| closed.contains(500, 500)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
