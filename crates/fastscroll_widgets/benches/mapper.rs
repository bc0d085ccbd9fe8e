//! Forward and inverse thumb mapping throughput

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fastscroll_core::Size;
use fastscroll_widgets::{GeometryMapper, HostProfile, ScrollState};

fn bench_forward(c: &mut Criterion) {
    let view = Size::new(1080.0, 2000.0);

    let items = GeometryMapper::new(8.0, 48.0, HostProfile::item_list());
    let item_state = ScrollState::from_items(100_000, 20, 0);
    c.bench_function("thumb_item_count", |b| {
        let mut first = 0usize;
        b.iter(|| {
            first = (first + 97) % 99_980;
            black_box(items.thumb(black_box(&item_state), first, view, 1.0))
        })
    });

    let pixels = GeometryMapper::new(8.0, 48.0, HostProfile::pixel_list());
    c.bench_function("thumb_pixel_extent", |b| {
        let mut offset = 0.0f32;
        b.iter(|| {
            offset = (offset + 173.0) % 998_000.0;
            let state = ScrollState::from_pixels(1_000_000.0, 2000.0, offset, 100_000, 20);
            black_box(pixels.thumb(&state, 0, view, 0.75))
        })
    });
}

fn bench_inverse(c: &mut Criterion) {
    let items = GeometryMapper::new(8.0, 48.0, HostProfile::item_list());
    let item_state = ScrollState::from_items(100_000, 20, 0);
    c.bench_function("target_index", |b| {
        let mut step = 0u32;
        b.iter(|| {
            step = (step + 7) % 2400;
            let y = step as f32 - 200.0;
            black_box(items.target(black_box(y), -12.0, &item_state, 2000.0))
        })
    });

    let pixels = GeometryMapper::new(8.0, 48.0, HostProfile::pixel_list());
    let pixel_state = ScrollState::from_pixels(1_000_000.0, 2000.0, 0.0, 100_000, 20);
    c.bench_function("target_offset", |b| {
        let mut step = 0u32;
        b.iter(|| {
            step = (step + 7) % 2400;
            let y = step as f32 - 200.0;
            black_box(pixels.target(black_box(y), -12.0, &pixel_state, 2000.0))
        })
    });
}

criterion_group!(benches, bench_forward, bench_inverse);
criterion_main!(benches);
