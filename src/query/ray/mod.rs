//! Ray-casting related definitions and implementations.

#[doc(inline)]
pub use self::ray::{NormalizationPolicy, Normalized, Ray, RayIntersection, Unnormalized};
pub use self::ray_sphere::{intersect_ray_sphere, ray_intersection_with_sphere, RaySphereIntersection};

#[doc(hidden)]
pub mod ray;
mod ray_sphere;
