// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use understory_overlay_state::{OverlayKind, StateOverlay, ViewState};

fn bench_show_cycle(c: &mut Criterion) {
    let mut overlay = StateOverlay::<u32>::new();
    overlay.set_layout(OverlayKind::Loading, 1);
    overlay.set_layout(OverlayKind::Empty, 2);
    overlay.set_layout(OverlayKind::Error, 3);

    let cycle = [
        ViewState::Loading,
        ViewState::Content,
        ViewState::Loading,
        ViewState::Error,
        ViewState::Empty,
        ViewState::Content,
    ];

    c.bench_function("overlay_state/show_cycle", |b| {
        b.iter(|| {
            for state in cycle {
                black_box(overlay.show(black_box(state)));
            }
        });
    });
}

criterion_group!(benches, bench_show_cycle);
criterion_main!(benches);
