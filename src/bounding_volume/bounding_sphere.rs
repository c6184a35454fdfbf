//! Bounding sphere.

use crate::bounding_volume::BoundingVolume;
use crate::math::{Point, Real};
use crate::shape::Sphere;

/// A Bounding Sphere.
///
/// This is the same type as [`Sphere`]: a sphere used to bound other geometric objects.
pub type BoundingSphere<T> = Sphere<T>;

impl<T: Real> BoundingVolume<T> for Sphere<T> {
    #[inline]
    fn center(&self) -> Point<T> {
        self.center
    }

    #[inline]
    fn intersects(&self, other: &Sphere<T>) -> bool {
        let distance_squared = na::distance_squared(&self.center, &other.center);
        let sum_radius = self.radius + other.radius;

        distance_squared <= sum_radius * sum_radius
    }

    #[inline]
    fn contains(&self, other: &Sphere<T>) -> bool {
        let distance = na::distance(&self.center, &other.center);

        distance + other.radius <= self.radius
    }

    #[inline]
    fn merge(&mut self, other: &Sphere<T>) {
        let mut dir = other.center - self.center;
        let norm = dir.normalize_mut();

        if norm == T::zero() {
            if other.radius > self.radius {
                self.radius = other.radius
            }
        } else {
            let s_center_dir = self.center.coords.dot(&dir);
            let o_center_dir = other.center.coords.dot(&dir);

            let right = if s_center_dir + self.radius > o_center_dir + other.radius {
                self.center + dir * self.radius
            } else {
                other.center + dir * other.radius
            };

            let left = if -s_center_dir + self.radius > -o_center_dir + other.radius {
                self.center - dir * self.radius
            } else {
                other.center - dir * other.radius
            };

            self.center = na::center(&left, &right);
            self.radius = na::distance(&right, &self.center);
        }
    }

    #[inline]
    fn merged(&self, other: &Sphere<T>) -> Sphere<T> {
        let mut res = *self;

        res.merge(other);

        res
    }

    #[inline]
    fn loosen(&mut self, amount: T) {
        assert!(amount >= T::zero(), "The loosening margin must not be negative.");
        self.radius += amount
    }

    #[inline]
    fn loosened(&self, amount: T) -> Sphere<T> {
        assert!(amount >= T::zero(), "The loosening margin must not be negative.");
        Sphere::new(self.center, self.radius + amount)
    }

    #[inline]
    fn tighten(&mut self, amount: T) {
        assert!(amount >= T::zero(), "The tightening margin must not be negative.");
        assert!(amount <= self.radius, "The tightening margin must not exceed the radius.");
        self.radius -= amount
    }

    #[inline]
    fn tightened(&self, amount: T) -> Sphere<T> {
        assert!(amount >= T::zero(), "The tightening margin must not be negative.");
        assert!(amount <= self.radius, "The tightening margin must not exceed the radius.");
        Sphere::new(self.center, self.radius - amount)
    }
}
