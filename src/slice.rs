//! Plane-based mesh splitting
//!
//! [`slice`] partitions a mesh into two closed sub-meshes, one per side of a
//! cutting plane, and synthesizes a triangle-fan cap over the hole the cut
//! leaves in each side. The work runs in four stages over a single pass:
//!
//! 1. classify every vertex against the plane (pluggable, see
//!    [`PointClassifier`]);
//! 2. route each triangle whole to the negative or positive output, or on to
//!    the clipper when its vertices disagree;
//! 3. clip straddling triangles into three sub-triangles with attributes
//!    interpolated at the two plane-edge intersections;
//! 4. cap each side by fanning the collected intersection chords from their
//!    centroid, on a freshly appended submesh.
//!
//! Each intersection chord is fanned independently from the shared centroid,
//! so both sides stay watertight for any cross-section shape, including
//! non-convex and multi-loop ones. A strongly non-convex cap can self-overlap
//! visually; the surface topology is still closed.
//!
//! The input mesh is read-only throughout; on error no output exists.

use crate::error::{Error, Result};
use crate::mesh::Mesh;
use crate::plane::{Plane, PointClassifier, SequentialClassifier, Side};
use nalgebra::{Point2, Point3, Vector3};

/// Clip denominators below this magnitude mean the edge runs (near-)parallel
/// to the cutting plane.
const MIN_CLIP_DENOMINATOR: f32 = 1.0e-8;

/// Cap construction is skipped when the cross-section degenerates below this
/// radius.
const MIN_CAP_RADIUS: f32 = 1.0e-6;

/// The two halves produced by one slice
#[derive(Debug, Clone, PartialEq)]
pub struct SliceOutput {
    /// Everything on the negative side of the plane, capped
    pub negative: Mesh,
    /// Everything on the positive side of the plane, capped
    pub positive: Mesh,
}

/// Split a mesh into two capped halves with a cutting plane
///
/// The plane must be expressed in the mesh's local space; any transform is
/// the caller's business. On success each half carries the original submesh
/// layout plus, if that side was actually cut, one appended submesh holding
/// its cap triangles. A plane that misses the mesh entirely routes every
/// triangle to one side and leaves that side identical to the input.
///
/// # Errors
///
/// - [`Error::EmptyMesh`] / [`Error::MalformedMesh`] when the input fails
///   [`Mesh::validate`]
/// - [`Error::DegenerateIntersection`] when a straddling edge is nearly
///   parallel to the plane
///
/// # Example
///
/// ```
/// use meshslice::{slice, Mesh, Plane};
/// use nalgebra::{Point2, Point3, Vector3};
///
/// let mut mesh = Mesh::new();
/// mesh.push_vertex(Point3::new(-1.0, 0.0, 0.0), Vector3::z(), Point2::new(0.0, 0.0));
/// mesh.push_vertex(Point3::new(1.0, 0.0, 0.0), Vector3::z(), Point2::new(1.0, 0.0));
/// mesh.push_vertex(Point3::new(1.0, 1.0, 0.0), Vector3::z(), Point2::new(1.0, 1.0));
/// mesh.submeshes.push(vec![0, 1, 2]);
///
/// let plane = Plane::new(Vector3::x(), Point3::origin()).unwrap();
/// let halves = slice(&mesh, &plane).unwrap();
/// assert_eq!(halves.negative.triangle_count(), 1);
/// assert_eq!(halves.positive.triangle_count(), 2);
/// ```
pub fn slice(mesh: &Mesh, plane: &Plane) -> Result<SliceOutput> {
    slice_with_classifier(mesh, plane, &SequentialClassifier)
}

/// Split a mesh using a caller-provided batch point classifier
///
/// Identical semantics to [`slice`]; only the vertex classification step is
/// delegated. Classification is per-point pure, so an accelerated classifier
/// (such as `ParallelClassifier` with the `parallel` feature) must produce
/// the same sides as the sequential one.
pub fn slice_with_classifier(
    mesh: &Mesh,
    plane: &Plane,
    classifier: &impl PointClassifier,
) -> Result<SliceOutput> {
    mesh.validate()?;

    let sides = classifier.classify_points(plane, &mesh.positions);

    // Exit early when the plane misses the mesh: the touched side is the
    // input verbatim, the other side a valid empty mesh.
    if sides.iter().all(|s| *s == Side::Positive) {
        return Ok(SliceOutput {
            negative: Mesh::new(),
            positive: mesh.clone(),
        });
    }
    if sides.iter().all(|s| *s == Side::Negative) {
        return Ok(SliceOutput {
            negative: mesh.clone(),
            positive: Mesh::new(),
        });
    }

    let mut negative = SideBuilder::new(mesh, plane, Side::Negative);
    let mut positive = SideBuilder::new(mesh, plane, Side::Positive);

    for (submesh, indices) in mesh.submeshes.iter().enumerate() {
        for tri in indices.chunks_exact(3) {
            let (a, b, c) = (tri[0], tri[1], tri[2]);
            let (sa, sb, sc) = (
                sides[a as usize],
                sides[b as usize],
                sides[c as usize],
            );

            if sa == sb && sb == sc {
                let out = if sa == Side::Positive {
                    &mut positive
                } else {
                    &mut negative
                };
                out.copy_triangle(mesh, submesh, a, b, c);
                continue;
            }

            // The lone vertex disagrees with the other two; the pair keeps
            // the winding order it had after the lone vertex in the cycle.
            let (lone, p1, p2) = if sa == sb {
                (c, a, b)
            } else if sb == sc {
                (a, b, c)
            } else {
                (b, c, a)
            };
            let lone_side = sides[lone as usize];
            clip_triangle(
                mesh,
                plane,
                submesh,
                lone,
                p1,
                p2,
                lone_side,
                &mut negative,
                &mut positive,
            )?;
        }
    }

    Ok(SliceOutput {
        negative: negative.commit(),
        positive: positive.commit(),
    })
}

/// A fully interpolated vertex created at a plane-edge intersection
///
/// Cut vertices never reuse source array indices; they are appended to the
/// output side that needs them.
#[derive(Debug, Clone, Copy)]
struct CutVertex {
    position: Point3<f32>,
    normal: Vector3<f32>,
    uv: Point2<f32>,
}

/// Interpolate all attributes along the edge `from -> to` at parameter `d`
fn cut_vertex(mesh: &Mesh, from: u32, to: u32, d: f32) -> CutVertex {
    let (f, t) = (from as usize, to as usize);
    CutVertex {
        position: mesh.positions[f] + (mesh.positions[t] - mesh.positions[f]) * d,
        normal: mesh.normals[f].lerp(&mesh.normals[t], d),
        uv: mesh.uvs[f] + (mesh.uvs[t] - mesh.uvs[f]) * d,
    }
}

/// Clip one straddling triangle against the plane
///
/// `lone` is the vertex whose side differs from `p1` and `p2`; `(lone, p1,
/// p2)` preserves the source triangle's cycle. The lone side receives
/// `(L, I1, I2)` and the pair side the quad fan `(P1, P2, I2)`, `(P1, I2,
/// I1)`, all in orientation-preserving order. Each edge interpolates with
/// its own parameter.
#[allow(clippy::too_many_arguments)]
fn clip_triangle(
    mesh: &Mesh,
    plane: &Plane,
    submesh: usize,
    lone: u32,
    p1: u32,
    p2: u32,
    lone_side: Side,
    negative: &mut SideBuilder,
    positive: &mut SideBuilder,
) -> Result<()> {
    let normal = plane.normal();
    let l = mesh.positions[lone as usize];
    let numerator = (plane.point() - l).dot(&normal);

    let den1 = (mesh.positions[p1 as usize] - l).dot(&normal);
    let den2 = (mesh.positions[p2 as usize] - l).dot(&normal);
    if den1.abs() < MIN_CLIP_DENOMINATOR || den2.abs() < MIN_CLIP_DENOMINATOR {
        return Err(Error::DegenerateIntersection);
    }

    let i1 = cut_vertex(mesh, lone, p1, numerator / den1);
    let i2 = cut_vertex(mesh, lone, p2, numerator / den2);

    let (lone_out, pair_out) = match lone_side {
        Side::Positive => (positive, negative),
        Side::Negative => (negative, positive),
    };

    let vl = lone_out.copy_vertex(mesh, lone);
    let vi1 = lone_out.push_cut_vertex(&i1);
    let vi2 = lone_out.push_cut_vertex(&i2);
    lone_out.push_triangle(submesh, vl, vi1, vi2);

    let wp1 = pair_out.copy_vertex(mesh, p1);
    let wp2 = pair_out.copy_vertex(mesh, p2);
    let wi1 = pair_out.push_cut_vertex(&i1);
    let wi2 = pair_out.push_cut_vertex(&i2);
    pair_out.push_triangle(submesh, wp1, wp2, wi2);
    pair_out.push_triangle(submesh, wp1, wi2, wi1);

    // Both sides cap the hole this chord leaves; order matters for the
    // pairwise fan.
    lone_out.cap_points.push(i1.position);
    lone_out.cap_points.push(i2.position);
    pair_out.cap_points.push(i1.position);
    pair_out.cap_points.push(i2.position);

    Ok(())
}

/// Accumulates one side's vertices, submesh index lists, and cap chords
///
/// Buffers are reserved for the worst case (every triangle clipped) up front
/// and trimmed once at commit.
struct SideBuilder {
    mesh: Mesh,
    /// Source vertex index -> index in this side's arrays; `u32::MAX` means
    /// not copied yet
    remap: Vec<u32>,
    /// Intersection points in discovery order, one `(I1, I2)` chord per
    /// straddling triangle
    cap_points: Vec<Point3<f32>>,
    /// Outward normal for this side's cap
    cap_normal: Vector3<f32>,
}

impl SideBuilder {
    fn new(source: &Mesh, plane: &Plane, side: Side) -> Self {
        let mut mesh = Mesh::with_capacity(
            3 * source.triangle_count(),
            source.submeshes.len() + 1,
        );
        mesh.submeshes = vec![Vec::new(); source.submeshes.len()];

        // The cap faces away from the kept half: the negative side is capped
        // along the plane normal, the positive side against it.
        let cap_normal = match side {
            Side::Negative => plane.normal(),
            Side::Positive => -plane.normal(),
        };

        Self {
            mesh,
            remap: vec![u32::MAX; source.positions.len()],
            cap_points: Vec::new(),
            cap_normal,
        }
    }

    /// Copy a source vertex into this side, reusing it if already copied
    fn copy_vertex(&mut self, source: &Mesh, index: u32) -> u32 {
        let i = index as usize;
        if self.remap[i] == u32::MAX {
            self.remap[i] =
                self.mesh
                    .push_vertex(source.positions[i], source.normals[i], source.uvs[i]);
        }
        self.remap[i]
    }

    fn push_cut_vertex(&mut self, v: &CutVertex) -> u32 {
        self.mesh.push_vertex(v.position, v.normal, v.uv)
    }

    fn push_triangle(&mut self, submesh: usize, a: u32, b: u32, c: u32) {
        self.mesh.submeshes[submesh].extend([a, b, c]);
    }

    /// Route a whole source triangle to this side, attributes intact
    fn copy_triangle(&mut self, source: &Mesh, submesh: usize, a: u32, b: u32, c: u32) {
        let (ma, mb, mc) = (
            self.copy_vertex(source, a),
            self.copy_vertex(source, b),
            self.copy_vertex(source, c),
        );
        self.push_triangle(submesh, ma, mb, mc);
    }

    /// Build the cap fan and finalize this side's mesh
    fn commit(mut self) -> Mesh {
        self.build_cap();
        self.mesh.positions.shrink_to_fit();
        self.mesh.normals.shrink_to_fit();
        self.mesh.uvs.shrink_to_fit();
        for indices in &mut self.mesh.submeshes {
            indices.shrink_to_fit();
        }
        self.mesh
    }

    /// Fan the collected intersection chords from their centroid
    ///
    /// Skipped entirely when the plane grazed at most one triangle corner or
    /// the cross-section has collapsed to a point, so an uncut side commits
    /// unchanged (no empty cap submesh is appended).
    fn build_cap(&mut self) {
        if self.cap_points.len() < 3 {
            return;
        }

        let centroid = Point3::from(
            self.cap_points
                .iter()
                .fold(Vector3::zeros(), |acc, p| acc + p.coords)
                / self.cap_points.len() as f32,
        );
        let max_radius = self
            .cap_points
            .iter()
            .map(|p| (p - centroid).norm())
            .fold(0.0_f32, f32::max);
        if max_radius <= MIN_CAP_RADIUS {
            return;
        }

        let (t1, t2) = tangent_basis(&self.cap_normal);
        let radial_uv = |p: &Point3<f32>| -> Point2<f32> {
            let rel = (p - centroid) / max_radius;
            Point2::new(0.5 + 0.5 * rel.dot(&t1), 0.5 + 0.5 * rel.dot(&t2))
        };

        let cap_normal = self.cap_normal;
        let center = self
            .mesh
            .push_vertex(centroid, cap_normal, Point2::new(0.5, 0.5));

        let chords = std::mem::take(&mut self.cap_points);
        let mut cap_indices = Vec::with_capacity((chords.len() / 2) * 3);
        for chord in chords.chunks_exact(2) {
            let (pa, pb) = (chord[0], chord[1]);
            let ia = self.mesh.push_vertex(pa, cap_normal, radial_uv(&pa));
            let ib = self.mesh.push_vertex(pb, cap_normal, radial_uv(&pb));

            // Wind each fan triangle so its face agrees with the cap normal;
            // the chord carries no orientation of its own.
            let face = (pa - centroid).cross(&(pb - pa));
            if face.dot(&cap_normal) >= 0.0 {
                cap_indices.extend([center, ia, ib]);
            } else {
                cap_indices.extend([center, ib, ia]);
            }
        }

        // The cap is its own material region, appended after the originals.
        self.mesh.submeshes.push(cap_indices);
    }
}

/// Deterministic orthonormal tangent basis for a unit normal
fn tangent_basis(normal: &Vector3<f32>) -> (Vector3<f32>, Vector3<f32>) {
    let helper = if normal.x.abs() > 0.9 {
        Vector3::y()
    } else {
        Vector3::x()
    };
    let t1 = normal.cross(&helper).normalize();
    let t2 = normal.cross(&t1);
    (t1, t2)
}
