use crate::bounding_volume::bounding_sphere_planar::planar_bounding_sphere;
use crate::bounding_volume::bounding_sphere_utils::{
    grow_to_fit, point_cloud_bounding_sphere_with_center,
};
use crate::math::{real, Point, Real, Vector};
use crate::shape::Sphere;
use crate::utils;

// Fraction of the radius removed before the first refinement pass.
const INITIAL_SHRINK: f64 = 0.05;

const AXES: [[f64; 3]; 3] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

const EXTENDED: [[f64; 3]; 13] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
    [1.0, 1.0, 1.0],
    [1.0, 1.0, -1.0],
    [1.0, -1.0, 1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, 0.0],
    [1.0, -1.0, 0.0],
    [1.0, 0.0, 1.0],
    [1.0, 0.0, -1.0],
    [0.0, 1.0, 1.0],
    [0.0, 1.0, -1.0],
];

/// The directions along which extremal points are searched to seed a bounding sphere.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SeedDirections {
    /// The three coordinate axes.
    Axes,
    /// The three coordinate axes, the four diagonals of a cube and the six diagonals of its
    /// faces.
    ///
    /// Costs about four times more than [`SeedDirections::Axes`] but gives an initial
    /// diameter much closer to the actual one on round point clouds.
    #[default]
    Extended,
}

/// Parameters of a [`BoundingSphereBuilder`].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingSphereOptions<T: Real> {
    /// Directions used to pick the initial diameter.
    pub seed: SeedDirections,
    /// Number of shrink-and-regrow passes run after the first enlargement pass.
    ///
    /// Each pass can only make the sphere smaller. Zero gives the plain Ritter sphere.
    pub refinement_passes: usize,
    /// Whether flat point clouds get a bounding sphere computed from the exact smallest
    /// enclosing circle of the points, in their plane.
    pub planar_fallback: bool,
    /// Maximum distance of the points to their best-fitting plane, relative to the diameter
    /// of the point cloud, for the point cloud to be considered flat.
    pub flatness_tolerance: T,
}

impl<T: Real> Default for BoundingSphereOptions<T> {
    fn default() -> Self {
        BoundingSphereOptions {
            seed: SeedDirections::Extended,
            refinement_passes: 8,
            planar_fallback: true,
            flatness_tolerance: T::default_epsilon().sqrt(),
        }
    }
}

/// Computes bounding spheres of point clouds.
///
/// The algorithm has two phases, in the manner of Ritter's bounding sphere:
/// 1. **Seed**: a single scan finds the extremal points of the cloud along a few fixed
///    directions (see [`SeedDirections`]). The pair of extremal points farthest apart is the
///    diameter of the initial sphere.
/// 2. **Enlargement**: each point outside of the current sphere grows it into the smallest
///    sphere containing both the current sphere and the point. This is then repeated from
///    slightly shrunk versions of the result (see
///    [`BoundingSphereOptions::refinement_passes`]), keeping the smallest sphere found.
///
/// The result always contains every point but is not the smallest enclosing sphere in
/// general. It is very close to it on most point clouds, except on flat ones (e.g. a disk of
/// points) where the enlargement phase tends to overshoot. So if the points lie on a common
/// plane (within [`BoundingSphereOptions::flatness_tolerance`]) the exact smallest enclosing
/// circle of the points is computed in that plane instead, and lifted back to 3D.
///
/// # Example
///
/// ```
/// use orb3d::bounding_volume::{BoundingSphereBuilder, SeedDirections};
/// use orb3d::math::Point;
///
/// let pts = [
///     Point::new(1.0f64, 0.0, 0.0),
///     Point::new(-1.0, 0.0, 0.0),
///     Point::new(0.0, 1.0, 0.0),
///     Point::new(0.0, 0.0, 0.5),
/// ];
///
/// let builder = BoundingSphereBuilder::default().with_seed(SeedDirections::Axes);
/// let sphere = builder.build(&pts);
///
/// assert!((sphere.center - Point::origin()).norm() < 1.0e-12);
/// assert!((sphere.radius - 1.0).abs() < 1.0e-12);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundingSphereBuilder<T: Real> {
    options: BoundingSphereOptions<T>,
}

impl<T: Real> Default for BoundingSphereBuilder<T> {
    fn default() -> Self {
        BoundingSphereBuilder::new(BoundingSphereOptions::default())
    }
}

impl<T: Real> BoundingSphereBuilder<T> {
    /// Creates a bounding sphere builder with the given options.
    pub fn new(options: BoundingSphereOptions<T>) -> Self {
        BoundingSphereBuilder { options }
    }

    /// The options of this builder.
    pub fn options(&self) -> &BoundingSphereOptions<T> {
        &self.options
    }

    /// Sets the directions used to pick the initial diameter.
    pub fn with_seed(mut self, seed: SeedDirections) -> Self {
        self.options.seed = seed;
        self
    }

    /// Sets the number of refinement passes.
    pub fn with_refinement_passes(mut self, passes: usize) -> Self {
        self.options.refinement_passes = passes;
        self
    }

    /// Enables or disables the exact computation for flat point clouds.
    pub fn with_planar_fallback(mut self, enabled: bool) -> Self {
        self.options.planar_fallback = enabled;
        self
    }

    /// Sets the relative tolerance used to detect flat point clouds.
    pub fn with_flatness_tolerance(mut self, tolerance: T) -> Self {
        assert!(
            tolerance >= T::zero(),
            "The flatness tolerance must not be negative."
        );
        self.options.flatness_tolerance = tolerance;
        self
    }

    /// Computes a sphere containing all the `points`.
    ///
    /// An empty slice gives a zero-radius sphere at the origin. A single point, or several
    /// copies of the same point, give a zero-radius sphere at that point.
    pub fn build(&self, points: &[Point<T>]) -> Sphere<T> {
        let first = match points {
            [] => return Sphere::point(Point::origin()),
            [pt] => return Sphere::point(*pt),
            [pt, ..] => *pt,
        };

        let seed = self.seed_sphere(points);

        if seed.radius == T::zero() {
            // The extremal points along the axes coincide, so all the points do.
            return Sphere::point(first);
        }

        let grown = grow_to_fit(seed, points.iter());
        let mut best = point_cloud_bounding_sphere_with_center(points, grown.center);
        let mut shrink: T = real(INITIAL_SHRINK);

        for pass in 0..self.options.refinement_passes {
            let shrunk = Sphere::new(best.center, best.radius * (T::one() - shrink));
            // Alternate the scan direction so the last points don't always pull the most.
            let regrown = if pass % 2 == 0 {
                grow_to_fit(shrunk, points.iter().rev())
            } else {
                grow_to_fit(shrunk, points.iter())
            };
            let candidate = point_cloud_bounding_sphere_with_center(points, regrown.center);

            if candidate.radius < best.radius {
                best = candidate;
            } else {
                shrink *= real::<T>(0.5);
            }
        }

        if self.options.planar_fallback {
            let tolerance = self.options.flatness_tolerance * best.radius * real::<T>(2.0);

            if let Some(planar) = planar_bounding_sphere(points, tolerance) {
                if planar.radius < best.radius {
                    log::debug!(
                        "Flat point cloud: bounding sphere radius reduced from {} to {}.",
                        best.radius,
                        planar.radius
                    );
                    best = planar;
                }
            }
        }

        best
    }

    fn seed_sphere(&self, points: &[Point<T>]) -> Sphere<T> {
        match self.options.seed {
            SeedDirections::Axes => {
                let ids = utils::point_cloud_extremal_ids(&directions(&AXES), points);
                widest_pair_sphere(&ids, points)
            }
            SeedDirections::Extended => {
                let ids = utils::point_cloud_extremal_ids(&directions(&EXTENDED), points);
                widest_pair_sphere(&ids, points)
            }
        }
    }
}

/// Computes a sphere containing all the given points.
///
/// This is [`BoundingSphereBuilder::build`] with the default options. Empty inputs give a
/// zero-radius sphere at the origin.
///
/// # Example
///
/// ```
/// use orb3d::bounding_volume::bounding_sphere;
/// use orb3d::math::Point;
///
/// let pts = [Point::new(1.0f32, 2.0, 3.0), Point::new(1.0, 2.0, 5.0)];
/// let sphere = bounding_sphere(&pts);
///
/// assert_eq!(sphere.center, Point::new(1.0, 2.0, 4.0));
/// assert_eq!(sphere.radius, 1.0);
/// ```
pub fn bounding_sphere<T: Real>(points: &[Point<T>]) -> Sphere<T> {
    BoundingSphereBuilder::default().build(points)
}

fn directions<T: Real, const N: usize>(dirs: &[[f64; 3]; N]) -> [Vector<T>; N] {
    dirs.map(|d| Vector::new(real(d[0]), real(d[1]), real(d[2])))
}

fn widest_pair_sphere<T: Real>(ids: &[(usize, usize)], points: &[Point<T>]) -> Sphere<T> {
    let mut best = ids[0];
    let mut best_sq_dist = na::distance_squared(&points[best.0], &points[best.1]);

    for pair in &ids[1..] {
        let sq_dist = na::distance_squared(&points[pair.0], &points[pair.1]);

        if sq_dist > best_sq_dist {
            best_sq_dist = sq_dist;
            best = *pair;
        }
    }

    let (a, b) = (&points[best.0], &points[best.1]);
    let center = na::center(a, b);
    let radius = na::distance(a, &center).max(na::distance(b, &center));
    Sphere::new(center, radius)
}
