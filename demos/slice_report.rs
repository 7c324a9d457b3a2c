//! Slice a procedurally generated UV sphere with an oblique plane and print
//! a report on each half, including cap statistics.
//!
//! Run with: cargo run --example slice_report

use meshslice::{Mesh, Plane, slice};
use nalgebra::{Point2, Point3, Vector3};
use std::f32::consts::PI;

/// UV sphere with radial normals and latitude/longitude UVs
fn uv_sphere(radius: f32, rings: usize, segments: usize) -> Mesh {
    let mut mesh = Mesh::with_capacity((rings + 1) * (segments + 1), 1);

    for r in 0..=rings {
        let v = r as f32 / rings as f32;
        let phi = v * PI;
        for s in 0..=segments {
            let u = s as f32 / segments as f32;
            let theta = u * 2.0 * PI;
            let normal = Vector3::new(
                phi.sin() * theta.cos(),
                phi.cos(),
                phi.sin() * theta.sin(),
            );
            mesh.push_vertex(Point3::from(normal * radius), normal, Point2::new(u, v));
        }
    }

    let stride = (segments + 1) as u32;
    let mut indices = Vec::with_capacity(6 * rings * segments);
    for r in 0..rings as u32 {
        for s in 0..segments as u32 {
            let a = r * stride + s;
            let b = a + stride;
            if r != 0 {
                indices.extend([a, a + 1, b]);
            }
            if r != rings as u32 - 1 {
                indices.extend([a + 1, b + 1, b]);
            }
        }
    }
    mesh.submeshes.push(indices);
    mesh
}

fn main() -> meshslice::Result<()> {
    let sphere = uv_sphere(1.0, 24, 32);
    let plane = Plane::new(Vector3::new(1.0, 0.7, 0.2), Point3::new(0.15, 0.0, 0.0))?;

    println!(
        "Sphere: {} vertices, {} triangles",
        sphere.positions.len(),
        sphere.triangle_count()
    );
    println!("Cutting plane: normal {}, point {}\n", plane.normal(), plane.point());

    let halves = slice(&sphere, &plane)?;

    for (name, half) in [("negative", &halves.negative), ("positive", &halves.positive)] {
        let cap_triangles = if half.submeshes.len() > 1 {
            half.submesh_triangle_count(half.submeshes.len() - 1)
        } else {
            0
        };
        println!("{name} side:");
        println!("  surface triangles: {}", half.submesh_triangle_count(0));
        println!("  cap triangles:     {cap_triangles}");
        println!("  volume:            {:.4}", half.signed_volume());
        println!();
    }

    let total = halves.negative.signed_volume() + halves.positive.signed_volume();
    println!(
        "volume check: {:.4} + {:.4} = {:.4} (sphere ≈ {:.4})",
        halves.negative.signed_volume(),
        halves.positive.signed_volume(),
        total,
        4.0 / 3.0 * PI
    );

    Ok(())
}
