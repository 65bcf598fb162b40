// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Rect, Vec2};
use understory_stretch::{StretchConfig, StretchController, stretch};

const FRAME: f64 = 1.0 / 60.0;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    /// Uniform-ish value in `[-range, range]`.
    fn next_signed(&mut self, range: f64) -> f64 {
        (f64::from(self.next_u32()) / f64::from(u32::MAX) * 2.0 - 1.0) * range
    }
}

/// A wandering pointer path starting at the origin.
fn pointer_path(len: usize, seed: u64) -> Vec<Point> {
    let mut rng = Lcg::new(seed);
    let mut pos = Point::ZERO;
    (0..len)
        .map(|_| {
            pos += Vec2::new(rng.next_signed(12.0), rng.next_signed(12.0));
            pos
        })
        .collect()
}

fn bench_stretch_transform(c: &mut Criterion) {
    let mut group = c.benchmark_group("stretch/transform");
    let config = StretchConfig::default();

    for len in [256usize, 4_096] {
        let translations: Vec<Vec2> = pointer_path(len, 7).iter().map(|p| p.to_vec2()).collect();
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(
            BenchmarkId::new("stretch", len),
            &translations,
            |b, translations| {
                b.iter(|| {
                    for t in translations {
                        black_box(stretch(black_box(*t), &config));
                    }
                });
            },
        );
    }

    group.finish();
}

fn bench_controller_gesture(c: &mut Criterion) {
    let mut group = c.benchmark_group("stretch/controller");
    let bounds = Rect::new(0.0, 0.0, 120.0, 120.0);

    // One move + one frame per pointer sample, then release and settle.
    for len in [60usize, 600] {
        let path = pointer_path(len, 42);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("gesture", len), &path, |b, path| {
            b.iter_batched(
                StretchController::default,
                |mut ctl| {
                    ctl.pointer_down(Point::ZERO);
                    for p in path {
                        ctl.pointer_moved(*p);
                        ctl.advance(FRAME);
                        black_box(ctl.current().transform_rect(bounds));
                    }
                    ctl.pointer_up();
                    while ctl.advance(FRAME) {}
                    black_box(ctl);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_stretch_transform, bench_controller_gesture);
criterion_main!(benches);
