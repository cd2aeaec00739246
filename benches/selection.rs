//! Benchmarks for active-section selection.
//!
//! Run with: cargo bench
//!
//! Results are saved to `target/criterion/` with HTML reports.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use storymap::layout::{SectionLayout, DEFAULT_BUFFER_RATIO};
use storymap::{ScrollSample, SectionActivator, Sections};

fn heights(count: u32) -> Vec<f64> {
    (0..count).map(|i| 300.0 + f64::from(i % 7) * 45.0).collect()
}

/// Selection over a pre-computed layout
fn bench_layout_select(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_select");
    for count in [10_u32, 100, 1_000] {
        let layout = SectionLayout::new(heights(count));
        let sample = ScrollSample::new(layout.total_height() * 0.75, 900.0);
        group.throughput(Throughput::Elements(u64::from(count)));
        group.bench_with_input(BenchmarkId::from_parameter(count), &layout, |b, layout| {
            b.iter(|| layout.select(black_box(sample), DEFAULT_BUFFER_RATIO))
        });
    }
    group.finish();
}

/// Full measure + select + mark cycle, as run per scroll
fn bench_activate(c: &mut Criterion) {
    let mut sections = Sections::from_heights(heights(100));
    let activator = SectionActivator::default();
    c.bench_function("activate_100", |b| {
        b.iter(|| {
            activator.select_active_on_scroll(
                &mut sections,
                black_box(ScrollSample::new(12_000.0, 900.0)),
            )
        })
    });
}

criterion_group!(benches, bench_layout_select, bench_activate);
criterion_main!(benches);
