use na::Unit;

use crate::math::{real, Real};
use crate::query::{NormalizationPolicy, Ray, RayIntersection};
use crate::shape::Sphere;
use crate::utils;

/// Outcome of [`intersect_ray_sphere`].
///
/// Only the closest qualifying root is ever reported. To get the second intersection of a ray
/// crossing a sphere, call [`intersect_ray_sphere`] again with `t_min` set to the first one.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RaySphereIntersection<T> {
    /// The ray misses the sphere, or only hits it at parameters `<= t_min`.
    NoIntersection,
    /// The smallest parameter `t > t_min` where the ray hits the sphere surface.
    OneIntersection(T),
}

impl<T: Copy> RaySphereIntersection<T> {
    /// The parameter of the intersection, if there is one.
    #[inline]
    pub fn time_of_impact(&self) -> Option<T> {
        match self {
            RaySphereIntersection::NoIntersection => None,
            RaySphereIntersection::OneIntersection(t) => Some(*t),
        }
    }

    /// Is this an intersection?
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, RaySphereIntersection::OneIntersection(_))
    }
}

impl<T: Copy> From<RaySphereIntersection<T>> for Option<T> {
    #[inline]
    fn from(inter: RaySphereIntersection<T>) -> Self {
        inter.time_of_impact()
    }
}

/// Computes the smallest parameter `t > t_min` such that `ray.point_at(t)` lies on the surface
/// of `sphere`.
///
/// `t_min` may be negative to accept intersections behind the ray origin.
///
/// The sphere radius must not be negative and the ray direction must not be zero. These
/// preconditions are only checked in debug builds.
///
/// # Numerical robustness
///
/// With `cs = origin − center`, the hit parameters are the roots of
/// `a·t² + 2·b·t + c = 0` where `a = |dir|²`, `b = cs·dir` and `c = |cs|² − r²`:
/// - `c` is computed with [`utils::widened_point_power`], i.e., in `f64` if `T` is `f32`,
///   since both squares are large and close to each other whenever the ray origin is far
///   from the sphere relative to its radius.
/// - the discriminant is not computed as `b² − a·c`. With `l = cs − (b / a)·dir` the vector
///   from the sphere center to the closest point of the ray line, it is `r² − |l|²`
///   (Hearn & Baker). This only subtracts quantities of the order of `r²` instead of two
///   products that may both be much larger.
/// - the roots are computed with [`utils::stable_quadratic_roots`].
///
/// A discriminant within rounding errors of zero is treated as exactly zero: a ray grazing
/// the sphere hits it exactly once. The tolerance accounts for the rounding of `l`, which
/// grows with `|cs|`, so a ray passing through a zero-radius sphere still hits it.
///
/// The [`Normalized`](crate::query::Normalized) policy skips the computation of `a`, which
/// is known to be `1`.
///
/// # Example
///
/// ```
/// use orb3d::math::{Point, Vector};
/// use orb3d::query::{intersect_ray_sphere, Ray, RaySphereIntersection};
/// use orb3d::shape::Sphere;
///
/// let sphere = Sphere::new(Point::new(5.0f64, 0.0, 0.0), 1.0);
/// let ray = Ray::new(Point::origin(), Vector::x());
///
/// let first = intersect_ray_sphere(&sphere, &ray, 0.0);
/// assert_eq!(first, RaySphereIntersection::OneIntersection(4.0));
///
/// let second = intersect_ray_sphere(&sphere, &ray, 4.0);
/// assert_eq!(second, RaySphereIntersection::OneIntersection(6.0));
///
/// let none = intersect_ray_sphere(&sphere, &ray, 6.0);
/// assert_eq!(none, RaySphereIntersection::NoIntersection);
/// ```
#[inline]
pub fn intersect_ray_sphere<T: Real, N: NormalizationPolicy>(
    sphere: &Sphere<T>,
    ray: &Ray<T, N>,
    t_min: T,
) -> RaySphereIntersection<T> {
    debug_assert!(
        sphere.radius >= T::zero(),
        "The radius of a sphere must not be negative."
    );

    let dir = ray.dir();
    let cs = ray.origin() - sphere.center;

    let a = ray.dir_squared_length();
    debug_assert!(a > T::zero(), "The direction of a ray must not be zero.");

    let b = cs.dot(dir);
    let c = utils::widened_point_power(&cs, sphere.radius);

    let b_over_a = if N::IS_NORMALIZED { b } else { b / a };
    let l = cs - dir * b_over_a;
    let sq_radius = sphere.radius * sphere.radius;
    let discriminant = sq_radius - l.norm_squared();
    // Rounding error on the components of `l`, which is what remains for a zero radius.
    let l_error = cs.norm() * T::default_epsilon() * real::<T>(16.0);
    let tangent_tolerance = sq_radius * T::default_epsilon() * real::<T>(2.0)
        + (sphere.radius * real::<T>(2.0) + l_error) * l_error;

    let hit = if discriminant.abs() <= tangent_tolerance {
        let t = -b_over_a;
        (t > t_min).then_some(t)
    } else if discriminant < T::zero() {
        None
    } else {
        let (t1, t2) = utils::stable_quadratic_roots(a, b, c, a * discriminant);

        if t1 > t_min {
            Some(t1)
        } else if t2 > t_min {
            Some(t2)
        } else {
            None
        }
    };

    match hit {
        Some(t) => {
            debug_assert!(t > t_min);
            RaySphereIntersection::OneIntersection(t)
        }
        None => RaySphereIntersection::NoIntersection,
    }
}

/// Computes the first intersection of a ray with a sphere after `t_min`, and the outward
/// surface normal at the hit point.
///
/// The normal of a sphere with a zero radius is the opposite of the ray direction.
pub fn ray_intersection_with_sphere<T: Real, N: NormalizationPolicy>(
    sphere: &Sphere<T>,
    ray: &Ray<T, N>,
    t_min: T,
) -> Option<RayIntersection<T>> {
    let t = intersect_ray_sphere(sphere, ray, t_min).time_of_impact()?;
    let outward = ray.point_at(t) - sphere.center;
    let normal = if sphere.radius > T::zero() {
        Unit::try_new(outward, T::zero()).map(Unit::into_inner)
    } else {
        None
    }
    .unwrap_or_else(|| -ray.dir().normalize());

    Some(RayIntersection::new(t, normal))
}

impl<T: Real> Sphere<T> {
    /// Computes the first intersection of `ray` with this sphere at a positive parameter.
    ///
    /// This is [`intersect_ray_sphere`] with `t_min = 0`.
    #[inline]
    pub fn intersect_ray<N: NormalizationPolicy>(
        &self,
        ray: &Ray<T, N>,
    ) -> RaySphereIntersection<T> {
        intersect_ray_sphere(self, ray, T::zero())
    }

    /// Computes the parameter of the first intersection of `ray` with this sphere, in
    /// `]0, max_time_of_impact]`.
    #[inline]
    pub fn cast_ray<N: NormalizationPolicy>(
        &self,
        ray: &Ray<T, N>,
        max_time_of_impact: T,
    ) -> Option<T> {
        self.intersect_ray(ray)
            .time_of_impact()
            .filter(|toi| *toi <= max_time_of_impact)
    }

    /// Computes the first intersection of `ray` with this sphere, in `]0, max_time_of_impact]`,
    /// with the outward surface normal at the hit point.
    #[inline]
    pub fn cast_ray_and_get_normal<N: NormalizationPolicy>(
        &self,
        ray: &Ray<T, N>,
        max_time_of_impact: T,
    ) -> Option<RayIntersection<T>> {
        ray_intersection_with_sphere(self, ray, T::zero())
            .filter(|inter| inter.time_of_impact <= max_time_of_impact)
    }

    /// Tests whether `ray` hits this sphere in `]0, max_time_of_impact]`.
    #[inline]
    pub fn intersects_ray<N: NormalizationPolicy>(
        &self,
        ray: &Ray<T, N>,
        max_time_of_impact: T,
    ) -> bool {
        self.cast_ray(ray, max_time_of_impact).is_some()
    }
}
