// Drives a full drag gesture (start, many moves, release) through the host
// to keep an eye on per-move dispatch cost; every move pays one bounds read
// and one mapping, nothing else.

use criterion::{criterion_group, criterion_main, Criterion};
use sash_app::Workspace;
use sash_core::{BoundsProbe, PointerEvent, Rect, TouchPoint, Vec2, ViewportClass};

struct Probe;

impl BoundsProbe for Probe {
    fn split_bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, 1280.0, 800.0)
    }
}

fn split_drag(c: &mut Criterion) {
    c.bench_function("split_drag_1000_moves", |b| {
        b.iter(|| {
            let mut ws = Workspace::new(ViewportClass::Wide);
            ws.start_split_resize(&PointerEvent::MouseDown {
                position: Vec2::new(640.0, 10.0),
                cancelable: false,
            });
            for i in 0..1000u32 {
                let x = (i % 1280) as f32;
                ws.handle_pointer(
                    &PointerEvent::MouseMove {
                        position: Vec2::new(x, 10.0),
                    },
                    &Probe,
                );
            }
            ws.handle_pointer(
                &PointerEvent::MouseUp {
                    position: Vec2::new(0.0, 10.0),
                },
                &Probe,
            );
            ws
        })
    });
}

fn panel_drag(c: &mut Criterion) {
    c.bench_function("panel_drag_1000_moves", |b| {
        b.iter(|| {
            let mut ws = Workspace::new(ViewportClass::Narrow);
            ws.start_panel_resize(&PointerEvent::TouchStart {
                touches: vec![TouchPoint::new(50.0, 400.0)],
                cancelable: true,
            });
            for i in 0..1000u32 {
                let y = 100.0 + (i % 500) as f32;
                ws.handle_pointer(
                    &PointerEvent::TouchMove {
                        touches: vec![TouchPoint::new(50.0, y)],
                    },
                    &Probe,
                );
            }
            ws.handle_pointer(
                &PointerEvent::TouchEnd { touches: Vec::new() },
                &Probe,
            );
            ws
        })
    });
}

criterion_group!(benches, split_drag, panel_drag);
criterion_main!(benches);
