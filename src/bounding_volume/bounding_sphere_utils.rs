use crate::math::{Point, Real};
use crate::shape::Sphere;

/// Computes the smallest sphere centered at `center` that contains all the given points.
///
/// The radius is the largest distance from `center` to a point of `pts`, so every point is
/// contained exactly, in the floating-point arithmetic used to compute the distances.
#[inline]
pub fn point_cloud_bounding_sphere_with_center<T: Real>(
    pts: &[Point<T>],
    center: Point<T>,
) -> Sphere<T> {
    let mut sqradius = T::zero();

    for pt in pts.iter() {
        let distance_squared = na::distance_squared(pt, &center);

        if distance_squared > sqradius {
            sqradius = distance_squared
        }
    }

    Sphere::new(center, sqradius.sqrt())
}

/// Grows `sphere` so it contains all the `pts`, in iteration order (Ritter's enlargement).
///
/// For each point outside of the current sphere, the sphere is replaced by the smallest sphere
/// containing both the current sphere and the point. Each new sphere contains the previous one
/// so points seen earlier stay inside.
pub(crate) fn grow_to_fit<'a, T: Real>(
    mut sphere: Sphere<T>,
    pts: impl Iterator<Item = &'a Point<T>>,
) -> Sphere<T> {
    let half: T = crate::math::real(0.5);

    for pt in pts {
        let sq_dist = na::distance_squared(&sphere.center, pt);

        if sq_dist > sphere.radius * sphere.radius {
            let dist = sq_dist.sqrt();
            let new_radius = (sphere.radius + dist) * half;
            let shift = (new_radius - sphere.radius) / dist;
            sphere.center += (pt - sphere.center) * shift;
            sphere.radius = new_radius;
        }
    }

    sphere
}
