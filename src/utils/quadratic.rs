use crate::math::Real;

/// Computes the two real roots of `a·t² + 2·half_b·t + c = 0`, in increasing order.
///
/// `reduced_discriminant` must be `half_b² − a·c`, non-negative, but is taken as an argument so
/// callers can evaluate it with a more accurate formula than the naive one (see
/// [`crate::query::intersect_ray_sphere`]). `a` must be positive.
///
/// The roots are computed with the cancellation-free formulation from *Numerical Recipes*:
/// with `q = −(half_b + copysign(sqrt(Δ), half_b))`, the roots are `c / q` and `q / a`. The
/// naive `(−half_b ± sqrt(Δ)) / a` loses most of its significant digits for the root where
/// `half_b` and `±sqrt(Δ)` have opposite signs and similar magnitudes.
///
/// # Example
///
/// ```
/// use orb3d::utils::stable_quadratic_roots;
///
/// // (t - 1)(t - 3) = t² - 4t + 3
/// let (t1, t2) = stable_quadratic_roots(1.0f64, -2.0, 3.0, 1.0);
/// assert_eq!((t1, t2), (1.0, 3.0));
/// ```
#[inline]
pub fn stable_quadratic_roots<T: Real>(a: T, half_b: T, c: T, reduced_discriminant: T) -> (T, T) {
    debug_assert!(a > T::zero(), "The leading coefficient must be positive.");
    debug_assert!(
        reduced_discriminant >= T::zero(),
        "The discriminant must not be negative."
    );

    let q = -(half_b + reduced_discriminant.sqrt().copysign(half_b));

    if q == T::zero() {
        // Only happens if half_b == 0 and the discriminant is zero: double root.
        let t = -half_b / a;
        return (t, t);
    }

    let t1 = c / q;
    let t2 = q / a;

    if t1 <= t2 {
        (t1, t2)
    } else {
        (t2, t1)
    }
}
