//! Scalar trait and type aliases for mathematical types.

use simba::scalar::RealField;

pub use na::{Isometry3, Matrix3, Point2, Point3, Translation3, UnitVector3, Vector2, Vector3};

/// The point type.
pub use Point3 as Point;

/// The vector type.
pub use Vector3 as Vector;

/// The unit vector type.
pub use UnitVector3 as UnitVector;

/// The matrix type.
pub use Matrix3 as Matrix;

/// The transformation matrix type.
pub use Isometry3 as Isometry;

/// The translation type.
pub use Translation3 as Translation;

/// The dimension of the space.
pub const DIM: usize = 3;

/// The scalar types supported by this crate.
///
/// Besides everything [`RealField`] provides (`zero`, `one`, `pi`, `sqrt`, `abs`,
/// `copysign`, `default_epsilon`, etc.), a `Real` knows a wider floating-point type it can be
/// promoted to. Computations subject to catastrophic cancellation are carried in that wider
/// type and then narrowed back, see [`crate::utils::widened_point_power`].
///
/// This is implemented for `f32` (widened to `f64`) and `f64` (which is its own wide type).
pub trait Real: RealField + Copy {
    /// The wider floating-point type used for cancellation-sensitive intermediate results.
    type Wide: RealField + Copy;

    /// Converts `self` to the wide type. This never loses precision.
    fn widen(self) -> Self::Wide;

    /// Converts a wide value back to `Self`, rounding to the nearest representable value.
    fn narrow(wide: Self::Wide) -> Self;
}

impl Real for f32 {
    type Wide = f64;

    #[inline(always)]
    fn widen(self) -> f64 {
        self as f64
    }

    #[inline(always)]
    fn narrow(wide: f64) -> f32 {
        wide as f32
    }
}

impl Real for f64 {
    type Wide = f64;

    #[inline(always)]
    fn widen(self) -> f64 {
        self
    }

    #[inline(always)]
    fn narrow(wide: f64) -> f64 {
        wide
    }
}

/// Converts an `f64` constant to the scalar type `T`.
#[inline(always)]
pub(crate) fn real<T: Real>(val: f64) -> T {
    na::convert::<f64, T>(val)
}
