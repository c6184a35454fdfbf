use crate::math::{real, Matrix, Point, Real};

/// Computes the center and the covariance matrix of a set of points.
///
/// # Panics
///
/// Panics if the input slice is empty.
pub fn center_cov<T: Real>(pts: &[Point<T>]) -> (Point<T>, Matrix<T>) {
    let center = crate::utils::center(pts);
    let mut cov: Matrix<T> = Matrix::zeros();
    let normalizer: T = real(1.0 / (pts.len() as f64));

    for p in pts.iter() {
        let cp = *p - center;
        // NOTE: this is more numerically stable than using cov.syger.
        cov += cp * (cp * normalizer).transpose();
    }

    (center, cov)
}
