// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_magnet::{Bounds, MagnetConfig, MagnetState};

fn bounds() -> Bounds {
    Bounds::new(Size::new(1080.0, 1920.0), Size::new(120.0, 120.0))
}

fn bench_drag_samples(c: &mut Criterion) {
    let mut group = c.benchmark_group("magnet/drag");

    // One press followed by `len` move samples, as a fast pointer would produce.
    for len in [16usize, 128, 1_024] {
        let samples: Vec<Point> = (0..len)
            .map(|i| {
                let t = i as f64;
                Point::new(500.0 + t * 1.5, 900.0 - t * 0.75)
            })
            .collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("on_move", len), &samples, |b, samples| {
            let mut magnet = MagnetState::new(MagnetConfig::default(), bounds());
            b.iter(|| {
                magnet.on_down(Point::new(440.0, 840.0), Point::new(500.0, 900.0), 0);
                for &p in samples {
                    black_box(magnet.on_move(p));
                }
                black_box(magnet.on_release(Point::new(600.0, 800.0), 500));
            });
        });
    }

    group.finish();
}

fn bench_snap_target(c: &mut Criterion) {
    let b = bounds();
    let positions: Vec<Point> = (0..256)
        .map(|i| Point::new(f64::from(i) * 8.0 - 200.0, f64::from(i) * 9.0 - 300.0))
        .collect();

    c.bench_function("magnet/snap_target", |bench| {
        bench.iter(|| {
            for &p in &positions {
                black_box(b.snap_target(black_box(p)));
            }
        });
    });
}

criterion_group!(benches, bench_drag_samples, bench_snap_target);
criterion_main!(benches);
