use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use meshslice::{Mesh, Plane, slice};
use nalgebra::{Point2, Point3, Vector3};

/// Generate a tessellated sheet with `2 * n * n` triangles spanning
/// `[-1, 1]²` in x/y with a gentle height field, so an oblique cut clips a
/// long band of triangles.
fn generate_sheet(n: usize) -> Mesh {
    let mut mesh = Mesh::with_capacity((n + 1) * (n + 1), 1);

    for j in 0..=n {
        for i in 0..=n {
            let x = -1.0 + 2.0 * i as f32 / n as f32;
            let y = -1.0 + 2.0 * j as f32 / n as f32;
            let z = 0.1 * (3.0 * x).sin() * (3.0 * y).cos();
            mesh.push_vertex(
                Point3::new(x, y, z),
                Vector3::z(),
                Point2::new((x + 1.0) / 2.0, (y + 1.0) / 2.0),
            );
        }
    }

    let stride = (n + 1) as u32;
    let mut indices = Vec::with_capacity(6 * n * n);
    for j in 0..n as u32 {
        for i in 0..n as u32 {
            let v = j * stride + i;
            indices.extend([v, v + 1, v + stride + 1]);
            indices.extend([v, v + stride + 1, v + stride]);
        }
    }
    mesh.submeshes.push(indices);
    mesh
}

fn bench_slice(c: &mut Criterion) {
    let plane = Plane::new(Vector3::new(1.0, 0.3, 0.0), Point3::new(0.05, 0.0, 0.0)).unwrap();

    let mut group = c.benchmark_group("slice_sheet");
    for n in [16, 64, 256] {
        let mesh = generate_sheet(n);
        group.throughput(criterion::Throughput::Elements(
            mesh.triangle_count() as u64
        ));
        group.bench_with_input(BenchmarkId::from_parameter(n), &mesh, |b, mesh| {
            b.iter(|| slice(black_box(mesh), black_box(&plane)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_slice);
criterion_main!(benches);
