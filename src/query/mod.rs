//! Non-persistent geometric queries.
//!
//! The main query of this module is [`intersect_ray_sphere`], which computes the closest
//! intersection of a [`Ray`] with a [`Sphere`](crate::shape::Sphere) after a given ray
//! parameter. The same query is available through methods of `Sphere`, e.g.,
//! [`Sphere::cast_ray`](crate::shape::Sphere::cast_ray).

pub use self::error::GeometryError;
pub use self::ray::{
    intersect_ray_sphere, ray_intersection_with_sphere, NormalizationPolicy, Normalized, Ray,
    RayIntersection, RaySphereIntersection, Unnormalized,
};

mod error;
mod ray;
