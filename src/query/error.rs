/// Errors returned by the checked constructors of spheres and rays.
///
/// The geometric queries themselves never fail: they only require their inputs to be valid,
/// which the unchecked constructors (e.g. [`Sphere::new`]) only verify in debug builds. Use
/// the checked constructors (e.g. [`Sphere::try_new`]) when the inputs come from an untrusted
/// source.
///
/// # Example
///
/// ```
/// use orb3d::math::Point;
/// use orb3d::query::GeometryError;
/// use orb3d::shape::Sphere;
///
/// assert_eq!(
///     Sphere::try_new(Point::origin(), -1.0f32),
///     Err(GeometryError::NegativeRadius)
/// );
/// ```
///
/// [`Sphere::new`]: crate::shape::Sphere::new
/// [`Sphere::try_new`]: crate::shape::Sphere::try_new
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GeometryError {
    /// The radius of a sphere is negative.
    #[error("the sphere radius must not be negative")]
    NegativeRadius,

    /// The radius of a sphere is NaN or infinite.
    #[error("the sphere radius must be finite")]
    NonFiniteRadius,

    /// The direction of a ray has a zero length.
    #[error("the ray direction must not be zero")]
    ZeroDirection,

    /// The direction of a ray has a NaN or infinite component.
    #[error("the ray direction must be finite")]
    NonFiniteDirection,
}
