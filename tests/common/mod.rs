//! Shared fixtures and geometric assertions for integration tests

#![allow(dead_code)]

use meshslice::Mesh;
use nalgebra::{Point2, Point3, Vector3};
use std::collections::HashMap;

/// Build a unit cube centered at the origin: 8 shared vertices, 12 triangles
/// with counter-clockwise winding viewed from outside, corner-direction
/// normals, and XY-projected UVs. One submesh.
pub fn unit_cube() -> Mesh {
    cuboid(Point3::origin(), Vector3::new(1.0, 1.0, 1.0))
}

/// Build an axis-aligned box with the given center and edge lengths
pub fn cuboid(center: Point3<f32>, extents: Vector3<f32>) -> Mesh {
    let h = extents / 2.0;
    let mut mesh = Mesh::with_capacity(8, 1);

    let corners = [
        Point3::new(center.x - h.x, center.y - h.y, center.z - h.z), // 0
        Point3::new(center.x + h.x, center.y - h.y, center.z - h.z), // 1
        Point3::new(center.x + h.x, center.y + h.y, center.z - h.z), // 2
        Point3::new(center.x - h.x, center.y + h.y, center.z - h.z), // 3
        Point3::new(center.x - h.x, center.y - h.y, center.z + h.z), // 4
        Point3::new(center.x + h.x, center.y - h.y, center.z + h.z), // 5
        Point3::new(center.x + h.x, center.y + h.y, center.z + h.z), // 6
        Point3::new(center.x - h.x, center.y + h.y, center.z + h.z), // 7
    ];
    for corner in corners {
        let normal = (corner - center).normalize();
        let uv = Point2::new(
            (corner.x - center.x) / extents.x + 0.5,
            (corner.y - center.y) / extents.y + 0.5,
        );
        mesh.push_vertex(corner, normal, uv);
    }

    mesh.submeshes.push(vec![
        0, 2, 1, 0, 3, 2, // bottom (z = min)
        4, 5, 6, 4, 6, 7, // top (z = max)
        0, 1, 5, 0, 5, 4, // front (y = min)
        3, 7, 6, 3, 6, 2, // back (y = max)
        0, 4, 7, 0, 7, 3, // left (x = min)
        1, 2, 6, 1, 6, 5, // right (x = max)
    ]);
    mesh
}

/// Clusters nearby points to a shared id so float noise at shared cut points
/// does not split edges apart.
struct PointIndex {
    cells: HashMap<(i64, i64, i64), Vec<(Point3<f32>, u32)>>,
    tolerance: f32,
    next: u32,
}

impl PointIndex {
    fn new(tolerance: f32) -> Self {
        Self {
            cells: HashMap::new(),
            tolerance,
            next: 0,
        }
    }

    fn cell(&self, p: &Point3<f32>) -> (i64, i64, i64) {
        let s = 1.0 / self.tolerance;
        (
            (p.x * s).round() as i64,
            (p.y * s).round() as i64,
            (p.z * s).round() as i64,
        )
    }

    fn id(&mut self, p: &Point3<f32>) -> u32 {
        let (cx, cy, cz) = self.cell(p);
        for dx in -1..=1 {
            for dy in -1..=1 {
                for dz in -1..=1 {
                    if let Some(bucket) = self.cells.get(&(cx + dx, cy + dy, cz + dz)) {
                        for (q, id) in bucket {
                            if (p - q).norm() <= self.tolerance {
                                return *id;
                            }
                        }
                    }
                }
            }
        }
        let id = self.next;
        self.next += 1;
        self.cells.entry((cx, cy, cz)).or_default().push((*p, id));
        id
    }
}

/// Assert that every positional edge of the mesh is shared by exactly two
/// triangles (no boundary, no fins)
pub fn assert_watertight(mesh: &Mesh, label: &str) {
    let mut points = PointIndex::new(1.0e-3);
    let mut edges: HashMap<(u32, u32), usize> = HashMap::new();

    for indices in &mesh.submeshes {
        for tri in indices.chunks_exact(3) {
            let ids = [
                points.id(&mesh.positions[tri[0] as usize]),
                points.id(&mesh.positions[tri[1] as usize]),
                points.id(&mesh.positions[tri[2] as usize]),
            ];
            for k in 0..3 {
                let (a, b) = (ids[k], ids[(k + 1) % 3]);
                assert_ne!(a, b, "{label}: degenerate edge in triangle {ids:?}");
                let key = (a.min(b), a.max(b));
                *edges.entry(key).or_insert(0) += 1;
            }
        }
    }

    for (edge, count) in &edges {
        assert_eq!(
            *count, 2,
            "{label}: edge {edge:?} is shared by {count} triangles, expected 2"
        );
    }
}

/// Number of triangles outside the appended cap submesh(es)
pub fn non_cap_triangle_count(mesh: &Mesh, original_submeshes: usize) -> usize {
    mesh.submeshes
        .iter()
        .take(original_submeshes)
        .map(|indices| indices.len() / 3)
        .sum()
}

/// How many times `position` occurs, bitwise-exactly, in the mesh's vertex
/// array
pub fn position_occurrences(mesh: &Mesh, position: &Point3<f32>) -> usize {
    mesh.positions.iter().filter(|p| *p == position).count()
}
