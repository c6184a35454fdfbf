use crate::math::{Isometry, Point, Real, Vector};
use crate::query::GeometryError;

/// A sphere, given by its center and radius.
///
/// The radius is never negative. A sphere with a zero radius degenerates to a point and is
/// still valid: it is what [`bounding_sphere`] returns for a single point.
///
/// Spheres are plain values: no operation modifies a sphere in place, except for the
/// `BoundingVolume` methods with an explicit `&mut self`.
///
/// [`bounding_sphere`]: crate::bounding_volume::bounding_sphere
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Sphere<T: Real> {
    /// The center of the sphere.
    pub center: Point<T>,
    /// The radius of the sphere.
    pub radius: T,
}

impl<T: Real> Sphere<T> {
    /// Creates a new sphere.
    ///
    /// The radius must not be negative. This is only checked in debug builds, see
    /// [`Sphere::try_new`] for a checked version.
    #[inline]
    pub fn new(center: Point<T>, radius: T) -> Sphere<T> {
        debug_assert!(
            radius >= T::zero(),
            "The radius of a sphere must not be negative."
        );
        Sphere { center, radius }
    }

    /// Creates a new sphere, checking that its radius is finite and non-negative.
    pub fn try_new(center: Point<T>, radius: T) -> Result<Sphere<T>, GeometryError> {
        if !radius.is_finite() {
            Err(GeometryError::NonFiniteRadius)
        } else if radius < T::zero() {
            Err(GeometryError::NegativeRadius)
        } else {
            Ok(Sphere { center, radius })
        }
    }

    /// A sphere with a zero radius located at `center`.
    #[inline]
    pub fn point(center: Point<T>) -> Sphere<T> {
        Sphere::new(center, T::zero())
    }

    /// The sphere center.
    #[inline]
    pub fn center(&self) -> &Point<T> {
        &self.center
    }

    /// The sphere radius.
    #[inline]
    pub fn radius(&self) -> T {
        self.radius
    }

    /// Tests if `pt` is inside of this sphere, or on its surface.
    #[inline]
    pub fn contains_point(&self, pt: &Point<T>) -> bool {
        na::distance_squared(&self.center, pt) <= self.radius * self.radius
    }

    /// The signed distance from the surface of this sphere to `pt`.
    ///
    /// The result is negative if the point is inside of the sphere.
    #[inline]
    pub fn distance_to_point(&self, pt: &Point<T>) -> T {
        na::distance(&self.center, pt) - self.radius
    }

    /// Transforms this sphere by `m`.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<T>) -> Sphere<T> {
        Sphere::new(m * self.center, self.radius)
    }

    /// Translates this sphere by `v`.
    #[inline]
    pub fn translated(&self, v: &Vector<T>) -> Sphere<T> {
        Sphere::new(self.center + v, self.radius)
    }
}
