use criterion::{black_box, criterion_group, criterion_main, Criterion};
use eclipse_core::{EclipseKind, EclipseRecord};
use eclipse_track::{build_overlays_with_config, TracerConfig};

fn sample_record() -> EclipseRecord {
    EclipseRecord {
        id: "bench".into(),
        date_ymd: "2027-08-02".into(),
        kind: EclipseKind::Total,
        t0_tt_hours: 9.0,
        delta_t_seconds: 71.0,
        tan_f1: 0.0047,
        tan_f2: 0.0046,
        x: vec![-0.2, 0.515, -0.0003, -0.000007],
        y: vec![0.35, -0.065, -0.00012],
        d: vec![17.8, 0.002],
        mu: vec![0.5, 15.0423],
        l1: vec![0.545, -0.00002],
        l2: vec![-0.004, -0.00002],
        greatest_eclipse_lat_deg: None,
        greatest_eclipse_lon_deg: None,
        greatest_eclipse_utc: None,
    }
}

fn tracer_bench(c: &mut Criterion) {
    let record = sample_record();
    let config = TracerConfig {
        penumbra_step_hours: 0.25,
        penumbra_bearings: 36,
        central_step_hours: 0.1,
        central_bearings: 24,
        ..Default::default()
    };
    c.bench_function("build_overlays", |b| {
        b.iter(|| build_overlays_with_config(black_box(&record), black_box(&config)))
    });
}

criterion_group!(benches, tracer_bench);
criterion_main!(benches);
