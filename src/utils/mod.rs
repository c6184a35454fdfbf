//! Various unsorted geometrical and numerical operators.

pub use self::center::center;
pub use self::cov::center_cov;
pub use self::point_cloud_extremal_ids::point_cloud_extremal_ids;
pub use self::point_power::widened_point_power;
pub use self::quadratic::stable_quadratic_roots;
pub use self::smallest_enclosing_circle::smallest_enclosing_circle;

mod center;
mod cov;
mod point_cloud_extremal_ids;
mod point_power;
mod quadratic;
mod smallest_enclosing_circle;
