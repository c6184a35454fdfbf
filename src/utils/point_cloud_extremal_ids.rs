use crate::math::{Point, Real, Vector};

/// Computes the indices of the points with the smallest and the largest projection on `dirs`.
///
/// All the directions are processed during a single scan of the point cloud. The result
/// `[(min_id, max_id); N]` is in the same order as `dirs`.
///
/// # Panics
///
/// Panics if `points` is empty.
pub fn point_cloud_extremal_ids<T: Real, const N: usize>(
    dirs: &[Vector<T>; N],
    points: &[Point<T>],
) -> [(usize, usize); N] {
    let mut ids = [(0, 0); N];
    let mut min_dots = [T::zero(); N];
    let mut max_dots = [T::zero(); N];

    for (k, dir) in dirs.iter().enumerate() {
        let dot = points[0].coords.dot(dir);
        min_dots[k] = dot;
        max_dots[k] = dot;
    }

    for (i, p) in points.iter().enumerate().skip(1) {
        for (k, dir) in dirs.iter().enumerate() {
            let dot = p.coords.dot(dir);

            if dot < min_dots[k] {
                min_dots[k] = dot;
                ids[k].0 = i;
            }

            if dot > max_dots[k] {
                max_dots[k] = dot;
                ids[k].1 = i;
            }
        }
    }

    ids
}
