use super::Point2;

/// Traversal direction of a closed polygon on a y-down canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
}

impl Winding {
    /// Classifies a vertex loop by the sign of its shoelace area.
    ///
    /// Positive signed area means clockwise here because the canvas y axis
    /// points down; anything else (including degenerate loops with zero
    /// area) classifies as counter-clockwise.
    #[must_use]
    pub fn of(points: &[Point2]) -> Self {
        if signed_area_2d(points) > 0.0 {
            Self::Clockwise
        } else {
            Self::CounterClockwise
        }
    }
}

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for clockwise traversal on a y-down canvas. Polygons with fewer
/// than 3 vertices have zero area.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Arithmetic mean of a vertex loop, used as the default outline center.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn vertex_mean_2d(points: &[Point2]) -> Point2 {
    if points.is_empty() {
        return Point2::origin();
    }
    let mut x = 0.0;
    let mut y = 0.0;
    for p in points {
        x += p.x;
        y += p.y;
    }
    let n = points.len() as f64;
    Point2::new(x / n, y / n)
}
