use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use cubic_bezier_editor::{
    pixel_to_value, value_to_pixel, BezierValue, CubicBezierEasing, PresetCatalog,
    PresetCategory,
};
use std::hint::black_box;

fn bench_easing(c: &mut Criterion) {
    let mut group = c.benchmark_group("easing");

    let curves = [
        ("linear", BezierValue::LINEAR),
        ("ease", BezierValue::EASE),
        ("back", BezierValue::new(0.68, -0.55, 0.27, 1.55)),
    ];

    for (name, value) in curves {
        let easing = CubicBezierEasing::new(&value);
        group.bench_with_input(BenchmarkId::new("ease_1000", name), &easing, |b, easing| {
            b.iter(|| {
                let mut sum = 0.0f32;
                for i in 0..1000 {
                    sum += easing.ease(black_box(i as f32 / 999.0));
                }
                black_box(sum)
            })
        });
    }

    group.bench_function("build_and_trace_20", |b| {
        b.iter(|| {
            let easing = CubicBezierEasing::new(black_box(&BezierValue::EASE));
            black_box(easing.trace(20))
        })
    });

    group.finish();
}

fn bench_coordinate_mapping(c: &mut Criterion) {
    let catalog = PresetCatalog::builtin();
    let values: Vec<BezierValue> = PresetCategory::ALL
        .iter()
        .flat_map(|&category| catalog.list(category).iter().map(|preset| preset.value))
        .collect();

    c.bench_function("value_pixel_round_trip_presets", |b| {
        b.iter(|| {
            for value in &values {
                let positions = value_to_pixel(black_box(value));
                black_box(pixel_to_value(&positions));
            }
        })
    });
}

criterion_group!(benches, bench_easing, bench_coordinate_mapping);
criterion_main!(benches);
