//! Bounding volumes.

#[doc(inline)]
pub use crate::bounding_volume::bounding_sphere::BoundingSphere;
pub use crate::bounding_volume::bounding_sphere_builder::{
    bounding_sphere, BoundingSphereBuilder, BoundingSphereOptions, SeedDirections,
};
pub use crate::bounding_volume::bounding_sphere_utils::point_cloud_bounding_sphere_with_center;
#[doc(inline)]
pub use crate::bounding_volume::bounding_volume::BoundingVolume;

#[doc(hidden)]
pub mod bounding_volume;

#[doc(hidden)]
pub mod bounding_sphere;
mod bounding_sphere_builder;
mod bounding_sphere_planar;
mod bounding_sphere_utils;
