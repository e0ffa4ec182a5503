use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use mesh_hyperslice::algs::{get_clipped, get_project, get_section, hyperrect};
use mesh_hyperslice::geometry::{Basis, Vector};
use mesh_hyperslice::topology::Mesh;

/// Box `[0, 1]^4` tilted so a coordinate hyperplane crosses most cells.
fn tilted_tesseract() -> Mesh<4> {
    let mut mesh = hyperrect(&Vector::splat(0.0), &Vector::splat(1.0));
    let c = Vector::splat(0.5);
    mesh.rot_about(&c, 0, 3, 0.4);
    mesh.rot_about(&c, 1, 3, 0.3);
    mesh.rot_about(&c, 2, 3, 0.2);
    mesh
}

fn bench_slice(c: &mut Criterion) {
    let mut group = c.benchmark_group("slice");
    let mesh = tilted_tesseract();

    for &offset in &[0.25f64, 0.5] {
        let center = Vector::new([0.5, 0.5, 0.5, offset]);
        let space = Basis::<4, 3>::identity(center);

        group.bench_with_input(BenchmarkId::new("section_4d", offset), &offset, |b, _| {
            b.iter(|| {
                let out = get_section(&mesh, &space);
                black_box(out);
            });
        });

        group.bench_with_input(BenchmarkId::new("clip_4d", offset), &offset, |b, _| {
            let normal = space.normal();
            b.iter(|| {
                let out = get_clipped(&mesh, &center, &normal);
                black_box(out);
            });
        });
    }

    let space = Basis::<4, 3>::identity(Vector::splat(0.0));
    group.bench_function("project_4d", |b| {
        b.iter(|| {
            let out = get_project(&mesh, &space);
            black_box(out);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_slice);
criterion_main!(benches);
