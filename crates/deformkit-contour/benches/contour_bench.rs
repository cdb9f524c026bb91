//! Criterion benchmarks for contour edits.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use deformkit_contour::{ContourShape, Quadrilateral, RegularPolygon, Side};
use deformkit_core::{DevicePoint, Vector};

fn bench_quadrilateral(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadrilateral");
    group.bench_function("edge_drag_step", |b| {
        let mut q = Quadrilateral::from_rect(0.0, 0.0, 200.0, 120.0);
        q.save();
        let v = Vector::new(35.0, 4.0);
        b.iter(|| {
            q.restore();
            q.save();
            black_box(q.add_vector(&v, Side::RightBottom).ok());
        })
    });
    group.bench_function("width_after_edit", |b| {
        let mut q = Quadrilateral::from_rect(0.0, 0.0, 200.0, 120.0);
        let v = Vector::new(0.5, 0.0);
        b.iter(|| {
            let _ = q.add_vector(&v, Side::Right);
            black_box(q.width())
        })
    });
    group.finish();
}

fn bench_regular_polygon(c: &mut Criterion) {
    let p = RegularPolygon::new(DevicePoint::new(0.0, 0.0), 50.0, 12).unwrap();
    c.bench_function("regular_polygon_points", |b| b.iter(|| black_box(p.points())));
}

criterion_group!(benches, bench_quadrilateral, bench_regular_polygon);
criterion_main!(benches);
