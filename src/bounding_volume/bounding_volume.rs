//! The bounding volume trait.

use crate::math::{Point, Real};

/// Trait of bounding volumes.
///
/// Bounding volumes are coarse approximations of shapes, with constant-time intersection and
/// inclusion tests. Two bounding volumes can be merged into a bigger one containing both.
pub trait BoundingVolume<T: Real> {
    /// Returns a point inside of this bounding volume. This is ideally its center.
    fn center(&self) -> Point<T>;

    /// Checks if this bounding volume intersects another one.
    fn intersects(&self, _: &Self) -> bool;

    /// Checks if this bounding volume contains another one.
    fn contains(&self, _: &Self) -> bool;

    /// Merges this bounding volume with another one. The merge is done in-place.
    fn merge(&mut self, _: &Self);

    /// Merges this bounding volume with another one.
    fn merged(&self, _: &Self) -> Self;

    /// Enlarges this bounding volume.
    fn loosen(&mut self, _: T);

    /// Creates an enlarged copy of this bounding volume.
    fn loosened(&self, _: T) -> Self;

    /// Shrinks this bounding volume.
    fn tighten(&mut self, _: T);

    /// Creates a shrunk copy of this bounding volume.
    fn tightened(&self, _: T) -> Self;
}
