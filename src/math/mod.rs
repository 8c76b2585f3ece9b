pub mod intersect_2d;
pub mod polygon_2d;
pub mod vector_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Threshold below which cut distances, radii and intersection denominators
/// are treated as zero.
pub const DISTANCE_EPSILON: f64 = 1e-3;
