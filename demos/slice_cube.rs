//! Slice a unit cube in half and report what comes out of each side.
//!
//! Run with: cargo run --example slice_cube

use meshslice::{Mesh, Plane, slice};
use nalgebra::{Point2, Point3, Vector3};

fn unit_cube() -> Mesh {
    let mut mesh = Mesh::with_capacity(8, 1);
    let corners = [
        Point3::new(-0.5, -0.5, -0.5),
        Point3::new(0.5, -0.5, -0.5),
        Point3::new(0.5, 0.5, -0.5),
        Point3::new(-0.5, 0.5, -0.5),
        Point3::new(-0.5, -0.5, 0.5),
        Point3::new(0.5, -0.5, 0.5),
        Point3::new(0.5, 0.5, 0.5),
        Point3::new(-0.5, 0.5, 0.5),
    ];
    for corner in corners {
        mesh.push_vertex(
            corner,
            corner.coords.normalize(),
            Point2::new(corner.x + 0.5, corner.y + 0.5),
        );
    }
    mesh.submeshes.push(vec![
        0, 2, 1, 0, 3, 2, // bottom
        4, 5, 6, 4, 6, 7, // top
        0, 1, 5, 0, 5, 4, // front
        3, 7, 6, 3, 6, 2, // back
        0, 4, 7, 0, 7, 3, // left
        1, 2, 6, 1, 6, 5, // right
    ]);
    mesh
}

fn main() -> meshslice::Result<()> {
    let cube = unit_cube();
    let plane = Plane::new(Vector3::x(), Point3::origin())?;

    println!("Slicing a unit cube with the plane x = 0...\n");
    let halves = slice(&cube, &plane)?;

    for (name, half) in [("negative", &halves.negative), ("positive", &halves.positive)] {
        println!("{name} side:");
        println!("  vertices:   {}", half.positions.len());
        println!("  submeshes:  {}", half.submeshes.len());
        for (i, _) in half.submeshes.iter().enumerate() {
            let kind = if i + 1 == half.submeshes.len() {
                " (cap)"
            } else {
                ""
            };
            println!(
                "    submesh {i}: {} triangles{kind}",
                half.submesh_triangle_count(i)
            );
        }
        println!("  volume:     {:.4}", half.signed_volume());
        if let Some((mins, maxs)) = half.aabb() {
            println!("  aabb:       {mins} .. {maxs}");
        }
        println!();
    }

    Ok(())
}
