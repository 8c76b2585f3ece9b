use super::{Point2, Vector2};

/// Rotates a vector by 90 degrees: `(x, y)` maps to `(-y, x)`.
///
/// Counter-clockwise in a y-up frame, clockwise on a y-down canvas.
#[must_use]
pub fn rotate_90(v: Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Rotates a vector by 270 degrees: `(x, y)` maps to `(y, -x)`.
#[must_use]
pub fn rotate_270(v: Vector2) -> Vector2 {
    Vector2::new(v.y, -v.x)
}

/// Normalizes a vector, mapping the zero vector to itself instead of NaN.
#[must_use]
pub fn unit_or_zero(v: Vector2) -> Vector2 {
    v.try_normalize(0.0).unwrap_or_else(Vector2::zeros)
}

/// Linear interpolation from `a` to `b` at parameter `t`.
#[must_use]
pub fn lerp_2d(a: Point2, b: Point2, t: f64) -> Point2 {
    Point2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
}

/// Midpoint of the segment from `a` to `b`.
#[must_use]
pub fn midpoint_2d(a: Point2, b: Point2) -> Point2 {
    Point2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}
