//! Error types for mesh slicing
//!
//! All errors are fatal to the `slice` call that raised them: no partial
//! output is produced and the input mesh is never mutated. Error codes follow
//! the pattern `E<category><number>`:
//!
//! - **E1xxx**: geometric degeneracies (plane, intersection)
//! - **E2xxx**: structural problems with the input mesh

use thiserror::Error;

/// Result type for slicing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while splitting a mesh with a plane
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The cutting plane's normal has (near-)zero length
    ///
    /// **Error Code**: E1001
    ///
    /// A zero-length normal makes every signed-distance test NaN, so the
    /// plane is rejected at construction time rather than letting the
    /// classifier produce garbage sides.
    #[error("[E1001] degenerate plane: normal has zero length")]
    DegeneratePlane,

    /// A clipped edge is (near-)parallel to the cutting plane
    ///
    /// **Error Code**: E1002
    ///
    /// Raised when the line-plane denominator of a straddling edge is close
    /// to zero, which would send the intersection parameter to infinity.
    #[error("[E1002] degenerate intersection: edge is nearly parallel to the cutting plane")]
    DegenerateIntersection,

    /// The input mesh contains no triangles
    ///
    /// **Error Code**: E2001
    #[error("[E2001] empty mesh: input contains no triangles")]
    EmptyMesh,

    /// The input mesh is structurally invalid
    ///
    /// **Error Code**: E2002
    ///
    /// **Common Causes**:
    /// - A triangle index referencing a vertex that does not exist
    /// - A submesh index list whose length is not a multiple of 3
    /// - Normal or UV arrays not parallel to the position array
    #[error("[E2002] malformed mesh: {0}")]
    MalformedMesh(String),
}

impl Error {
    /// Create a `MalformedMesh` error for an out-of-range vertex index
    pub(crate) fn index_out_of_range(submesh: usize, index: u32, vertex_count: usize) -> Self {
        Error::MalformedMesh(format!(
            "submesh {submesh} references vertex {index} but the mesh has only {vertex_count} vertices"
        ))
    }

    /// Create a `MalformedMesh` error for a submesh whose length is not a
    /// multiple of 3
    pub(crate) fn ragged_submesh(submesh: usize, len: usize) -> Self {
        Error::MalformedMesh(format!(
            "submesh {submesh} has {len} indices, which is not a multiple of 3"
        ))
    }

    /// Create a `MalformedMesh` error for attribute arrays of unequal length
    pub(crate) fn attribute_mismatch(positions: usize, normals: usize, uvs: usize) -> Self {
        Error::MalformedMesh(format!(
            "attribute arrays are not parallel: {positions} positions, {normals} normals, {uvs} UVs"
        ))
    }
}
