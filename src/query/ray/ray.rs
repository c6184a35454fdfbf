//! Rays and their normalization policies.

use core::fmt::Debug;
use core::marker::PhantomData;

use na::Unit;

use crate::math::{Isometry, Point, Real, UnitVector, Vector};
use crate::query::GeometryError;

mod sealed {
    pub trait Sealed {}
}

/// Type-level tag telling whether the direction of a [`Ray`] is known to have a unit length.
///
/// This trait is sealed: it is implemented by [`Normalized`] and [`Unnormalized`] only.
/// Queries are generic over the policy so they get monomorphized into two specialized
/// routines: the one for [`Normalized`] rays skips every computation involving `|dir|²`.
pub trait NormalizationPolicy:
    sealed::Sealed + Copy + Clone + Debug + Default + PartialEq + Send + Sync + 'static
{
    /// `true` if rays with this policy always have a unit direction.
    const IS_NORMALIZED: bool;

    /// The squared length of `dir`, assuming `dir` is the direction of a ray with this policy.
    fn squared_length<T: Real>(dir: &Vector<T>) -> T;
}

/// Policy of rays with a direction of unit length.
///
/// Such rays can only be created from a [`Unit`] vector, or by normalizing an
/// [`Unnormalized`] ray.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Normalized;

/// Policy of rays with an arbitrary nonzero direction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Unnormalized;

impl sealed::Sealed for Normalized {}
impl sealed::Sealed for Unnormalized {}

impl NormalizationPolicy for Normalized {
    const IS_NORMALIZED: bool = true;

    #[inline(always)]
    fn squared_length<T: Real>(_: &Vector<T>) -> T {
        T::one()
    }
}

impl NormalizationPolicy for Unnormalized {
    const IS_NORMALIZED: bool = false;

    #[inline(always)]
    fn squared_length<T: Real>(dir: &Vector<T>) -> T {
        dir.norm_squared()
    }
}

/// A ray for ray-casting queries.
///
/// A ray is a half-infinite line starting at an origin point and extending infinitely in a
/// direction. Points along the ray are `origin + dir * t`.
///
/// # Direction vector
///
/// The policy `N` tells whether the direction is known to have a unit length:
/// - [`Unnormalized`] (the default): `dir` can be any nonzero vector and the parameter `t` of
///   a point on the ray is scaled by `1 / dir.norm()`.
/// - [`Normalized`]: `dir` has a unit length so `t` is the distance from the origin. This is
///   enforced by construction: such rays are built from a [`Unit`] vector.
///
/// The fields are private so the policy can't be invalidated after construction.
///
/// # Example
///
/// ```rust
/// use orb3d::math::{Point, Vector};
/// use orb3d::query::{Normalized, Ray};
///
/// let ray = Ray::new(Point::origin(), Vector::new(2.0f32, 0.0, 0.0));
/// assert_eq!(ray.point_at(1.5), Point::new(3.0, 0.0, 0.0));
///
/// let (unit_ray, length): (Ray<f32, Normalized>, f32) = ray.normalize().unwrap();
/// assert_eq!(length, 2.0);
/// assert_eq!(unit_ray.point_at(3.0), Point::new(3.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Ray<T: Real, N: NormalizationPolicy = Unnormalized> {
    origin: Point<T>,
    dir: Vector<T>,
    policy: PhantomData<N>,
}

impl<T: Real> Ray<T, Unnormalized> {
    /// Creates a new ray from an origin point and a direction vector.
    ///
    /// The direction must not be zero. This is only checked in debug builds, see
    /// [`Ray::try_new`] for a checked version.
    #[inline]
    pub fn new(origin: Point<T>, dir: Vector<T>) -> Self {
        debug_assert!(
            dir.norm_squared() > T::zero(),
            "The direction of a ray must not be zero."
        );
        Ray {
            origin,
            dir,
            policy: PhantomData,
        }
    }

    /// Creates a new ray, checking that its direction is finite and nonzero.
    pub fn try_new(origin: Point<T>, dir: Vector<T>) -> Result<Self, GeometryError> {
        check_direction(&dir)?;
        Ok(Self::new(origin, dir))
    }

    /// Normalizes the direction of this ray.
    ///
    /// Returns the normalized ray together with the length of the original direction. A
    /// point at parameter `t` on `self` is at parameter `t * length` on the normalized ray.
    /// Returns `None` if the direction is zero.
    #[inline]
    pub fn normalize(&self) -> Option<(Ray<T, Normalized>, T)> {
        Unit::try_new_and_get(self.dir, T::zero())
            .map(|(dir, length)| (Ray::new_normalized(self.origin, dir), length))
    }
}

impl<T: Real> Ray<T, Normalized> {
    /// Creates a new ray with a unit direction.
    #[inline]
    pub fn new_normalized(origin: Point<T>, dir: UnitVector<T>) -> Self {
        Ray {
            origin,
            dir: dir.into_inner(),
            policy: PhantomData,
        }
    }

    /// Creates a new ray with a unit direction by normalizing `dir`.
    ///
    /// Fails if `dir` is zero or not finite.
    pub fn try_from_direction(origin: Point<T>, dir: Vector<T>) -> Result<Self, GeometryError> {
        check_direction(&dir)?;
        Unit::try_new(dir, T::zero())
            .map(|dir| Self::new_normalized(origin, dir))
            .ok_or(GeometryError::ZeroDirection)
    }

    /// The unit direction of this ray.
    #[inline]
    pub fn unit_dir(&self) -> UnitVector<T> {
        Unit::new_unchecked(self.dir)
    }

    /// Forgets that the direction of this ray is normalized.
    #[inline]
    pub fn into_unnormalized(self) -> Ray<T, Unnormalized> {
        Ray {
            origin: self.origin,
            dir: self.dir,
            policy: PhantomData,
        }
    }
}

impl<T: Real, N: NormalizationPolicy> Ray<T, N> {
    /// Starting point of the ray.
    #[inline]
    pub fn origin(&self) -> &Point<T> {
        &self.origin
    }

    /// Direction vector of the ray.
    #[inline]
    pub fn dir(&self) -> &Vector<T> {
        &self.dir
    }

    /// The squared length of the direction of this ray.
    ///
    /// This is exactly `1` for [`Normalized`] rays, without any computation.
    #[inline]
    pub fn dir_squared_length(&self) -> T {
        N::squared_length(&self.dir)
    }

    /// Computes the point along the ray at parameter `t`, i.e., `origin + dir * t`.
    #[inline]
    pub fn point_at(&self, t: T) -> Point<T> {
        self.origin + self.dir * t
    }

    /// Translates this ray by the given vector. The direction is unchanged.
    #[inline]
    pub fn translate_by(&self, v: Vector<T>) -> Self {
        Ray {
            origin: self.origin + v,
            dir: self.dir,
            policy: PhantomData,
        }
    }

    /// Transforms this ray by the given isometry.
    ///
    /// Isometries preserve lengths so the normalization policy is preserved too.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<T>) -> Self {
        Ray {
            origin: m * self.origin,
            dir: m * self.dir,
            policy: PhantomData,
        }
    }

    /// Transforms this ray by the inverse of the given isometry.
    ///
    /// This is equivalent to expressing the ray in the local space of an object
    /// positioned at `m`.
    #[inline]
    pub fn inverse_transform_by(&self, m: &Isometry<T>) -> Self {
        Ray {
            origin: m.inverse_transform_point(&self.origin),
            dir: m.inverse_transform_vector(&self.dir),
            policy: PhantomData,
        }
    }
}

impl<T: Real> From<Ray<T, Normalized>> for Ray<T, Unnormalized> {
    #[inline]
    fn from(ray: Ray<T, Normalized>) -> Self {
        ray.into_unnormalized()
    }
}

fn check_direction<T: Real>(dir: &Vector<T>) -> Result<(), GeometryError> {
    if !dir.iter().all(|e| e.is_finite()) {
        Err(GeometryError::NonFiniteDirection)
    } else if dir.norm_squared() == T::zero() {
        Err(GeometryError::ZeroDirection)
    } else {
        Ok(())
    }
}

/// Result of a ray cast against a sphere, with the surface normal at the hit point.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RayIntersection<T: Real> {
    /// The parameter `t` where the ray hits the shape.
    ///
    /// The hit point is `ray.point_at(time_of_impact)`. If the ray direction is normalized,
    /// this is the distance traveled from the ray origin.
    pub time_of_impact: T,

    /// The outward unit normal of the surface at the hit point.
    pub normal: Vector<T>,
}

impl<T: Real> RayIntersection<T> {
    /// Creates a new `RayIntersection`.
    #[inline]
    pub fn new(time_of_impact: T, normal: Vector<T>) -> RayIntersection<T> {
        RayIntersection {
            time_of_impact,
            normal,
        }
    }

    /// Transforms the normal of this intersection by `m`.
    #[inline]
    pub fn transform_by(&self, m: &Isometry<T>) -> Self {
        RayIntersection {
            time_of_impact: self.time_of_impact,
            normal: m * self.normal,
        }
    }
}
