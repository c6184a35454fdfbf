//! Shapes supported by orb3d.

pub use self::sphere::Sphere;

mod sphere;
