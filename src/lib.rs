//! # meshslice
//!
//! Plane-based splitting of triangulated surface meshes.
//!
//! Given a mesh with per-vertex normals and UVs and a cutting plane expressed
//! in the mesh's local space, [`slice`] produces two closed sub-meshes, one
//! per side of the plane, each capped with a synthesized triangle fan where
//! the plane crossed the surface. Triangles wholly on one side are copied
//! verbatim; straddling triangles are clipped with full attribute
//! interpolation at the intersections.
//!
//! ## Features
//!
//! - Pure Rust implementation with no unsafe code
//! - Single-pass classify/route/clip/cap pipeline
//! - Attribute-complete clipping: positions, normals, and UVs interpolated
//!   per cut edge
//! - Caps land on their own submesh with a radial disc UV layout
//! - Pluggable batch point classification (`parallel` feature adds a
//!   rayon-backed classifier)
//!
//! ## Example
//!
//! ```
//! use meshslice::{slice, Mesh, Plane};
//! use nalgebra::{Point2, Point3, Vector3};
//!
//! # fn main() -> meshslice::Result<()> {
//! let mut mesh = Mesh::new();
//! mesh.push_vertex(Point3::new(-1.0, 0.0, 0.0), Vector3::z(), Point2::new(0.0, 0.0));
//! mesh.push_vertex(Point3::new(1.0, 0.0, 0.0), Vector3::z(), Point2::new(1.0, 0.0));
//! mesh.push_vertex(Point3::new(0.0, 1.0, 0.0), Vector3::z(), Point2::new(0.5, 1.0));
//! mesh.submeshes.push(vec![0, 1, 2]);
//!
//! let plane = Plane::new(Vector3::x(), Point3::origin())?;
//! let halves = slice(&mesh, &plane)?;
//!
//! println!(
//!     "negative: {} triangles, positive: {} triangles",
//!     halves.negative.triangle_count(),
//!     halves.positive.triangle_count(),
//! );
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod mesh;
pub mod plane;
pub mod slice;

pub use error::{Error, Result};
pub use mesh::{Aabb, Mesh};
pub use plane::{Plane, PointClassifier, SequentialClassifier, Side};
#[cfg(feature = "parallel")]
pub use plane::ParallelClassifier;
pub use slice::{slice, slice_with_classifier, SliceOutput};
