use crate::math::{Real, Vector};

/// Computes `|offset|² − radius²` with the intermediate results promoted to `T::Wide`.
///
/// This is the power of a point with respect to a sphere when `offset` is the vector from the
/// sphere center to the point: it is negative inside of the sphere, zero on its surface and
/// positive outside. When the point is far from the center relative to the radius, both
/// squares are large and close to each other so subtracting them in `T` loses most of the
/// significant digits. Squaring and subtracting in the wider type first, then narrowing
/// back, only rounds once.
///
/// For `f64` the wide type is `f64` itself so this is the plain formula.
///
/// # Example
///
/// ```
/// use orb3d::math::Vector;
/// use orb3d::utils::widened_point_power;
///
/// let power = widened_point_power(&Vector::new(10_000.5f32, 0.0, 0.0), 10_000.0);
/// assert_eq!(power, 10_000.25);
/// ```
#[inline]
pub fn widened_point_power<T: Real>(offset: &Vector<T>, radius: T) -> T {
    let wide_offset: Vector<T::Wide> = offset.map(T::widen);
    let wide_radius = radius.widen();
    T::narrow(wide_offset.norm_squared() - wide_radius * wide_radius)
}
