// Copyright 2026 the Skidway Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `skidway_bridge` event extraction.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Rect;

use skidway_bridge::{CoordinateSpace, MotionAction, MotionBatch, MotionEvent, PointerCoords};
use skidway_viewport::ViewportMetrics;

/// Small deterministic LCG so inputs are stable across runs.
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

fn event_with_pointers(count: usize) -> MotionEvent {
    let mut rng = Lcg(0x5eed);
    let mut event = MotionEvent::new(MotionAction::Move, 100, 116);
    for i in 0..count {
        event = event.with_pointer(PointerCoords {
            id: i as i32,
            x: rng.next_f64() * 800.0,
            y: rng.next_f64() * 600.0,
            orientation: rng.next_f64(),
            pressure: rng.next_f64(),
            tool_major: rng.next_f64() * 20.0,
            tool_minor: rng.next_f64() * 10.0,
        });
    }
    event
}

fn metrics() -> ViewportMetrics {
    ViewportMetrics::new(
        Rect::new(100.0, 50.0, 900.0, 650.0),
        Rect::new(0.0, 0.0, 4000.0, 4000.0),
        2.0,
    )
}

fn bench_extract(c: &mut Criterion) {
    let metrics = metrics();
    let mut group = c.benchmark_group("motion_batch_from_event");
    for count in [1usize, 2, 5, 10] {
        let event = event_with_pointers(count);
        group.bench_with_input(BenchmarkId::new("view", count), &event, |b, event| {
            b.iter(|| {
                black_box(MotionBatch::from_event(
                    black_box(event),
                    &metrics,
                    CoordinateSpace::View,
                ))
            });
        });
        group.bench_with_input(BenchmarkId::new("layer", count), &event, |b, event| {
            b.iter(|| {
                black_box(MotionBatch::from_event(
                    black_box(event),
                    &metrics,
                    CoordinateSpace::Layer,
                ))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
