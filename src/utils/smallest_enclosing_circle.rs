use crate::math::{real, Point2, Real};

// Seed of the shuffle. Fixed so the result only depends on the input.
const SHUFFLE_SEED: u64 = 0x5eed_c1c1e;

#[derive(Copy, Clone, Debug)]
struct Circle<T: Real> {
    center: Point2<T>,
    sq_radius: T,
}

impl<T: Real> Circle<T> {
    fn point(center: Point2<T>) -> Self {
        Circle {
            center,
            sq_radius: T::zero(),
        }
    }

    fn diametral(a: &Point2<T>, b: &Point2<T>) -> Self {
        let center = na::center(a, b);
        let sq_radius = na::distance_squared(a, &center).max(na::distance_squared(b, &center));
        Circle { center, sq_radius }
    }

    fn circumscribed(a: &Point2<T>, b: &Point2<T>, c: &Point2<T>) -> Self {
        let ab = b - a;
        let ac = c - a;
        let ab2 = ab.norm_squared();
        let ac2 = ac.norm_squared();
        let det = (ab.x * ac.y - ab.y * ac.x) * real::<T>(2.0);

        if det.abs() <= T::default_epsilon() * (ab2 * ac2).sqrt() {
            // Collinear triple: the smallest circle through them is the widest diametral one.
            log::debug!("Degenerate triangle while computing a smallest enclosing circle.");
            let bc2 = na::distance_squared(b, c);
            return if ab2 >= ac2 && ab2 >= bc2 {
                Self::diametral(a, b)
            } else if ac2 >= bc2 {
                Self::diametral(a, c)
            } else {
                Self::diametral(b, c)
            };
        }

        let offset = na::Vector2::new(
            (ac.y * ab2 - ab.y * ac2) / det,
            (ab.x * ac2 - ac.x * ab2) / det,
        );
        let center = a + offset;
        let sq_radius = offset
            .norm_squared()
            .max(na::distance_squared(b, &center))
            .max(na::distance_squared(c, &center));

        Circle { center, sq_radius }
    }

    fn contains(&self, pt: &Point2<T>) -> bool {
        let slack = T::one() + T::default_epsilon() * real::<T>(4.0);
        na::distance_squared(&self.center, pt) <= self.sq_radius * slack
    }
}

/// Computes the smallest circle enclosing a set of 2D points.
///
/// Returns the circle center and radius. An empty input yields a zero-radius circle at the
/// origin.
///
/// This is the incremental form of Welzl's algorithm: it runs in expected linear time on a
/// random permutation of the input. The permutation is computed on an internal copy of the
/// points, with a fixed seed, so the result is deterministic.
///
/// # Example
///
/// ```
/// use orb3d::math::Point2;
/// use orb3d::utils::smallest_enclosing_circle;
///
/// let pts = [
///     Point2::new(-1.0f64, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(0.0, 0.5),
/// ];
/// let (center, radius) = smallest_enclosing_circle(&pts);
///
/// assert!((center - Point2::origin()).norm() < 1.0e-12);
/// assert!((radius - 1.0).abs() < 1.0e-12);
/// ```
pub fn smallest_enclosing_circle<T: Real>(points: &[Point2<T>]) -> (Point2<T>, T) {
    if points.is_empty() {
        return (Point2::origin(), T::zero());
    }

    let mut pts = points.to_vec();
    shuffle(&mut pts);

    let mut circle = Circle::point(pts[0]);

    for i in 1..pts.len() {
        if circle.contains(&pts[i]) {
            continue;
        }

        circle = Circle::point(pts[i]);

        for j in 0..i {
            if circle.contains(&pts[j]) {
                continue;
            }

            circle = Circle::diametral(&pts[i], &pts[j]);

            for k in 0..j {
                if !circle.contains(&pts[k]) {
                    circle = Circle::circumscribed(&pts[i], &pts[j], &pts[k]);
                }
            }
        }
    }

    (circle.center, circle.sq_radius.sqrt())
}

fn shuffle<P>(pts: &mut [P]) {
    let mut rng = oorandom::Rand32::new(SHUFFLE_SEED);

    for i in (1..pts.len()).rev() {
        let j = rng.rand_range(0..i as u32 + 1) as usize;
        pts.swap(i, j);
    }
}
