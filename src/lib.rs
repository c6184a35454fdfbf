/*!
orb3d
========

**orb3d** is a small 3-dimensional geometric library written with
the rust programming language. It focuses on two things:

* numerically robust ray/sphere intersection, see [`query::intersect_ray_sphere`];
* bounding spheres of point clouds, see [`bounding_volume::bounding_sphere`].

Every type is generic over the scalar type, which can be either `f32` or `f64`
(see [`math::Real`]).

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![deny(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![doc(html_root_url = "http://docs.rs/orb3d/0.1.0")]
#![deny(unused_qualifications)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
#[cfg(test)]
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;
pub extern crate simba;

pub mod bounding_volume;
pub mod math;
pub mod query;
pub mod shape;
pub mod utils;
