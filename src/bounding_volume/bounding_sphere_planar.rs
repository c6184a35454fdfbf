use crate::bounding_volume::point_cloud_bounding_sphere_with_center;
use crate::math::{Point, Point2, Real, Vector};
use crate::shape::Sphere;
use crate::utils;

/// Computes a bounding sphere of `points` from the smallest enclosing circle of the points in
/// their best-fitting plane.
///
/// Returns `None` if a point is farther than `tolerance` from that plane. The normal of the
/// plane is the eigenvector of the smallest eigenvalue of the covariance matrix of the points;
/// the other two eigenvectors give the 2D coordinates of the points in the plane.
pub(crate) fn planar_bounding_sphere<T: Real>(
    points: &[Point<T>],
    tolerance: T,
) -> Option<Sphere<T>> {
    let (centroid, cov) = utils::center_cov(points);
    let eig = cov.symmetric_eigen();

    let mut normal_id = 0;
    for i in 1..3 {
        if eig.eigenvalues[i] < eig.eigenvalues[normal_id] {
            normal_id = i;
        }
    }

    let normal: Vector<T> = eig.eigenvectors.column(normal_id).into_owned();
    let mut spread = T::zero();

    for pt in points {
        spread = spread.max((pt - centroid).dot(&normal).abs());

        if spread > tolerance {
            return None;
        }
    }

    let u: Vector<T> = eig.eigenvectors.column((normal_id + 1) % 3).into_owned();
    let v: Vector<T> = eig.eigenvectors.column((normal_id + 2) % 3).into_owned();
    let projected: Vec<Point2<T>> = points
        .iter()
        .map(|pt| {
            let dpt = pt - centroid;
            Point2::new(dpt.dot(&u), dpt.dot(&v))
        })
        .collect();

    let (center2d, _) = utils::smallest_enclosing_circle(&projected);
    let center = centroid + u * center2d.x + v * center2d.y;

    Some(point_cloud_bounding_sphere_with_center(points, center))
}
