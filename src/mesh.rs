//! Triangle mesh data model
//!
//! A [`Mesh`] stores per-vertex attributes in parallel arrays (position,
//! normal, UV) and its triangles as per-submesh index lists. A submesh is a
//! material region: every triangle in it shares one surface appearance.
//! Vertices have no identity beyond their position in the arrays.
//!
//! The mesh is assumed manifold and consistently wound (front face =
//! counter-clockwise when viewed against the stored normals). [`Mesh::validate`]
//! checks structure, not topology.

use crate::error::{Error, Result};
use nalgebra::{Point2, Point3, Vector3};

/// An axis-aligned bounding box as `(mins, maxs)`
pub type Aabb = (Point3<f32>, Point3<f32>);

/// A triangulated surface mesh with per-vertex normals and UVs
///
/// # Example
///
/// ```
/// use meshslice::Mesh;
/// use nalgebra::{Point2, Point3, Vector3};
///
/// let mut mesh = Mesh::new();
/// mesh.push_vertex(Point3::new(0.0, 0.0, 0.0), Vector3::z(), Point2::new(0.0, 0.0));
/// mesh.push_vertex(Point3::new(1.0, 0.0, 0.0), Vector3::z(), Point2::new(1.0, 0.0));
/// mesh.push_vertex(Point3::new(0.0, 1.0, 0.0), Vector3::z(), Point2::new(0.0, 1.0));
/// mesh.submeshes.push(vec![0, 1, 2]);
///
/// assert_eq!(mesh.triangle_count(), 1);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions
    pub positions: Vec<Point3<f32>>,
    /// Vertex normals, parallel to `positions`
    pub normals: Vec<Vector3<f32>>,
    /// Vertex texture coordinates, parallel to `positions`
    pub uvs: Vec<Point2<f32>>,
    /// One flat triangle index list per submesh (material region); each
    /// consecutive index triple is one triangle
    pub submeshes: Vec<Vec<u32>>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new mesh with pre-allocated capacity
    ///
    /// Useful when the vertex and submesh counts are known in advance, as it
    /// avoids reallocation while the mesh grows.
    pub fn with_capacity(vertices: usize, submeshes: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertices),
            normals: Vec::with_capacity(vertices),
            uvs: Vec::with_capacity(vertices),
            submeshes: Vec::with_capacity(submeshes),
        }
    }

    /// Append a vertex to all three attribute arrays, returning its index
    pub fn push_vertex(
        &mut self,
        position: Point3<f32>,
        normal: Vector3<f32>,
        uv: Point2<f32>,
    ) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
        index
    }

    /// Total number of triangles across all submeshes
    pub fn triangle_count(&self) -> usize {
        self.submeshes.iter().map(|indices| indices.len() / 3).sum()
    }

    /// Number of triangles in one submesh
    ///
    /// Returns 0 for an out-of-range submesh id.
    pub fn submesh_triangle_count(&self, submesh: usize) -> usize {
        self.submeshes.get(submesh).map_or(0, |s| s.len() / 3)
    }

    /// Check the mesh's structural invariants
    ///
    /// Fails with [`Error::EmptyMesh`] when no submesh contains a triangle,
    /// and with [`Error::MalformedMesh`] when the attribute arrays are not
    /// parallel, a submesh length is not a multiple of 3, or an index
    /// references a vertex that does not exist.
    pub fn validate(&self) -> Result<()> {
        if self.normals.len() != self.positions.len() || self.uvs.len() != self.positions.len() {
            return Err(Error::attribute_mismatch(
                self.positions.len(),
                self.normals.len(),
                self.uvs.len(),
            ));
        }

        if self.triangle_count() == 0 {
            return Err(Error::EmptyMesh);
        }

        let vertex_count = self.positions.len();
        for (submesh, indices) in self.submeshes.iter().enumerate() {
            if indices.len() % 3 != 0 {
                return Err(Error::ragged_submesh(submesh, indices.len()));
            }
            for &index in indices {
                if index as usize >= vertex_count {
                    return Err(Error::index_out_of_range(submesh, index, vertex_count));
                }
            }
        }

        Ok(())
    }

    /// Compute the axis-aligned bounding box of the mesh
    ///
    /// Returns `None` for a mesh with no vertices.
    pub fn aabb(&self) -> Option<Aabb> {
        let first = *self.positions.first()?;
        let mut mins = first;
        let mut maxs = first;
        for p in &self.positions[1..] {
            mins = mins.inf(p);
            maxs = maxs.sup(p);
        }
        Some((mins, maxs))
    }

    /// Compute the signed volume of the mesh using the divergence theorem
    ///
    /// For a watertight mesh with counter-clockwise winding the volume is
    /// positive; a negative result indicates inverted triangles. Triangles
    /// with out-of-range indices are skipped (they are caught separately by
    /// [`Mesh::validate`]).
    pub fn signed_volume(&self) -> f64 {
        let mut volume = 0.0_f64;
        for indices in &self.submeshes {
            for tri in indices.chunks_exact(3) {
                let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
                if a >= self.positions.len()
                    || b >= self.positions.len()
                    || c >= self.positions.len()
                {
                    continue;
                }
                let (v1, v2, v3) = (&self.positions[a], &self.positions[b], &self.positions[c]);
                volume += v1.x as f64 * (v2.y as f64 * v3.z as f64 - v2.z as f64 * v3.y as f64)
                    + v2.x as f64 * (v3.y as f64 * v1.z as f64 - v3.z as f64 * v1.y as f64)
                    + v3.x as f64 * (v1.y as f64 * v2.z as f64 - v1.z as f64 * v2.y as f64);
            }
        }
        volume / 6.0
    }
}
