use criterion::{Criterion, black_box, criterion_group, criterion_main};
use eclipse_geo::{destination_point_deg, observer_to_fundamental};

fn projector_bench(c: &mut Criterion) {
    c.bench_function("observer_to_fundamental", |b| {
        b.iter(|| {
            observer_to_fundamental(
                black_box(36.1408),
                black_box(-5.3536),
                black_box(17.76247),
                black_box(328.42249),
                black_box(0.0),
            )
        })
    });
}

fn destination_bench(c: &mut Criterion) {
    c.bench_function("destination_point_deg", |b| {
        b.iter(|| {
            destination_point_deg(
                black_box(10.0),
                black_box(20.0),
                black_box(123.0),
                black_box(8.0),
            )
        })
    });
}

criterion_group!(benches, projector_bench, destination_bench);
criterion_main!(benches);
