//! Cutting plane and point classification
//!
//! A [`Plane`] is a unit normal plus a reference point known to lie on the
//! plane. The side of a point `p` is the sign of `dot(normal, p - point)`;
//! a point exactly on the plane deterministically resolves to
//! [`Side::Positive`] so a triangle can never sit on three different sides.
//!
//! Batch classification goes through the [`PointClassifier`] trait. The
//! reference implementation is [`SequentialClassifier`]; with the `parallel`
//! cargo feature enabled, [`ParallelClassifier`] classifies the batch with
//! rayon. Both are order-preserving and per-point pure, so they are
//! interchangeable.

use crate::error::{Error, Result};
use nalgebra::{Point3, Unit, Vector3};

/// Minimum norm accepted for a plane normal before it is considered
/// degenerate.
const MIN_NORMAL_NORM: f32 = 1.0e-6;

/// Which half-space a point belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// `dot(normal, p - point) < 0`
    Negative,
    /// `dot(normal, p - point) >= 0` (points exactly on the plane land here)
    Positive,
}

/// A cutting plane in the mesh's local space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    normal: Unit<Vector3<f32>>,
    point: Point3<f32>,
}

impl Plane {
    /// Create a plane from a normal and a point on the plane
    ///
    /// The normal is normalized; a (near-)zero-length normal fails with
    /// [`Error::DegeneratePlane`].
    ///
    /// # Example
    ///
    /// ```
    /// use meshslice::{Plane, Side};
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let plane = Plane::new(Vector3::x() * 3.0, Point3::origin()).unwrap();
    /// assert_eq!(plane.side(&Point3::new(1.0, 0.0, 0.0)), Side::Positive);
    /// assert_eq!(plane.side(&Point3::new(-1.0, 0.0, 0.0)), Side::Negative);
    /// ```
    pub fn new(normal: Vector3<f32>, point: Point3<f32>) -> Result<Self> {
        let normal = Unit::try_new(normal, MIN_NORMAL_NORM).ok_or(Error::DegeneratePlane)?;
        Ok(Self { normal, point })
    }

    /// The plane's unit normal
    pub fn normal(&self) -> Vector3<f32> {
        self.normal.into_inner()
    }

    /// The plane's reference point
    pub fn point(&self) -> Point3<f32> {
        self.point
    }

    /// Signed distance from the plane to a point, positive along the normal
    pub fn signed_distance(&self, p: &Point3<f32>) -> f32 {
        (p - self.point).dot(&self.normal)
    }

    /// Classify a point against the plane
    ///
    /// Pure per-point function. Points exactly on the plane are biased to
    /// [`Side::Positive`].
    pub fn side(&self, p: &Point3<f32>) -> Side {
        if self.signed_distance(p) >= 0.0 {
            Side::Positive
        } else {
            Side::Negative
        }
    }
}

/// Batch point classification against a plane
///
/// Contract: same per-point semantics as [`Plane::side`], order-preserving,
/// no cross-point dependency. This is the seam for plugging in an
/// accelerated classifier; the slicing stages themselves stay sequential.
pub trait PointClassifier {
    /// Classify every point, returning one [`Side`] per input point in order
    fn classify_points(&self, plane: &Plane, points: &[Point3<f32>]) -> Vec<Side>;
}

/// The reference single-threaded classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialClassifier;

impl PointClassifier for SequentialClassifier {
    fn classify_points(&self, plane: &Plane, points: &[Point3<f32>]) -> Vec<Side> {
        points.iter().map(|p| plane.side(p)).collect()
    }
}

/// A rayon-backed classifier that fans the batch out across threads
///
/// Available with the `parallel` cargo feature. Classification is per-point
/// pure, so the parallel result is identical to the sequential one.
#[cfg(feature = "parallel")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ParallelClassifier;

#[cfg(feature = "parallel")]
impl PointClassifier for ParallelClassifier {
    fn classify_points(&self, plane: &Plane, points: &[Point3<f32>]) -> Vec<Side> {
        use rayon::prelude::*;
        points.par_iter().map(|p| plane.side(p)).collect()
    }
}
