#[macro_use]
extern crate criterion;
extern crate mandelgif;

use criterion::Criterion;
use mandelgif::{sample_region, sample_threaded, Region};

fn sampling(c: &mut Criterion) {
    let region = Region::new(-2.0, 1.0, -1.25, 1.25, 0.02).unwrap();
    c.bench_function("sample 151x126 at 50 iterations", move |b| {
        b.iter(|| sample_region(50, &region))
    });
    c.bench_function("sample 151x126 at 50 iterations, 4 threads", move |b| {
        b.iter(|| sample_threaded(50, &region, 4))
    });
}

criterion_group!(benches, sampling);
criterion_main!(benches);
