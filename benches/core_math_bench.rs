use chart_brush::api::{
    AxisConfig, AxisDomainBuilder, AxisTick, EstimatedLabelWidth, TickInterval, TickSelector,
};
use chart_brush::core::{BrushWindow, DomainValue, PositionalScale};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_locate_index_100k(c: &mut Criterion) {
    let scale = PositionalScale::build(100_000, 0.0, 1_925.0, 5.0).expect("valid scale");
    let table = scale.coordinate_table();

    c.bench_function("locate_index_100k", |b| {
        b.iter(|| {
            let _ = table.locate(black_box(1_234.567));
        })
    });
}

fn bench_range_to_indices_100k(c: &mut Criterion) {
    let scale = PositionalScale::build(100_000, 0.0, 1_925.0, 5.0).expect("valid scale");
    let table = scale.coordinate_table();

    c.bench_function("range_to_indices_100k_gap_7", |b| {
        b.iter(|| {
            let _ = table.range_to_indices(black_box(1_500.25), black_box(312.8), black_box(7));
        })
    });
}

fn bench_tick_selector_10k(c: &mut Criterion) {
    let ticks: Vec<AxisTick> = (0..10_000)
        .map(|i| AxisTick::new(DomainValue::number(i as f64), i as f64 * 0.4, i, 0.0))
        .collect();
    let measure = EstimatedLabelWidth::default();

    for interval in [
        TickInterval::PreserveStart,
        TickInterval::PreserveStartEnd,
        TickInterval::EquidistantPreserveStart,
    ] {
        let selector = TickSelector::new(interval, 5.0, (0.0, 4_000.0));
        c.bench_function(&format!("tick_selector_10k_{interval:?}"), |b| {
            b.iter(|| {
                let _ = selector.select(black_box(&ticks), &measure);
            })
        });
    }
}

fn bench_axis_domain_windowed_category(c: &mut Criterion) {
    let values: Vec<DomainValue> = (0..20_000)
        .map(|i| DomainValue::category(format!("day-{i}")))
        .collect();
    let config = AxisConfig::category().with_interval(TickInterval::PreserveStartEnd);
    let measure = EstimatedLabelWidth::default();

    c.bench_function("axis_domain_category_window_5k", |b| {
        b.iter(|| {
            let _ = AxisDomainBuilder::build(
                black_box(&values),
                Some(BrushWindow::new(2_000, 7_000)),
                &config,
                (0.0, 1_600.0),
                &measure,
            );
        })
    });
}

fn bench_axis_domain_numeric(c: &mut Criterion) {
    let values: Vec<DomainValue> = (0..20_000)
        .map(|i| DomainValue::number((i as f64 * 0.37).sin() * 250.0))
        .collect();
    let config = AxisConfig::number().with_tick_count(6.0);
    let measure = EstimatedLabelWidth::default();

    c.bench_function("axis_domain_numeric_20k", |b| {
        b.iter(|| {
            let _ = AxisDomainBuilder::build(
                black_box(&values),
                None,
                &config,
                (400.0, 0.0),
                &measure,
            );
        })
    });
}

criterion_group!(
    benches,
    bench_locate_index_100k,
    bench_range_to_indices_100k,
    bench_tick_selector_10k,
    bench_axis_domain_windowed_category,
    bench_axis_domain_numeric
);
criterion_main!(benches);
