use crate::math::vector_2d::{rotate_270, rotate_90, unit_or_zero};
use crate::math::Point2;

/// A cubic Bezier segment.
///
/// `p0` and `p3` are on-curve anchors; `p1` and `p2` are control points
/// shaping the tangent at each anchor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cubic {
    pub p0: Point2,
    pub p1: Point2,
    pub p2: Point2,
    pub p3: Point2,
}

impl Cubic {
    #[must_use]
    pub fn new(p0: Point2, p1: Point2, p2: Point2, p3: Point2) -> Self {
        Self { p0, p1, p2, p3 }
    }

    /// Straight segment from `a` to `b`, with the control points collapsed
    /// onto the anchors.
    #[must_use]
    pub fn straight_line(a: Point2, b: Point2) -> Self {
        Self {
            p0: a,
            p1: a,
            p2: b,
            p3: b,
        }
    }

    /// Approximates the circular arc from `p0` to `p3` around `center` with
    /// a single cubic segment.
    ///
    /// Control handles lie along the circle tangents at the endpoints,
    /// scaled by the kappa factor `(4/3)·tan(angle/4)` so the curve midpoint
    /// lands on the circle. `is_convex` picks which side of the chord the
    /// arc bows toward, matching the turn direction of the corner being
    /// rounded. A zero angular span collapses the handles onto the anchors.
    #[must_use]
    pub fn circular_arc(center: Point2, p0: Point2, p3: Point2, is_convex: bool) -> Self {
        let v0 = p0 - center;
        let v3 = p3 - center;
        let dot = unit_or_zero(v0).dot(&unit_or_zero(v3));
        let angle = dot.clamp(-1.0, 1.0).acos();
        // The radius vectors keep their length, so the handles scale with
        // the radius without a separate multiplication.
        let kappa = 4.0 / 3.0 * (angle / 4.0).tan();
        if is_convex {
            Self {
                p0,
                p1: p0 + rotate_90(v0) * kappa,
                p2: p3 - rotate_90(v3) * kappa,
                p3,
            }
        } else {
            Self {
                p0,
                p1: p0 + rotate_270(v0) * kappa,
                p2: p3 - rotate_270(v3) * kappa,
                p3,
            }
        }
    }

    /// The same curve traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            p0: self.p3,
            p1: self.p2,
            p2: self.p1,
            p3: self.p0,
        }
    }

    /// Evaluates the curve at parameter `t` in `[0, 1]` (Bernstein form).
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let u = 1.0 - t;
        let b0 = u * u * u;
        let b1 = 3.0 * u * u * t;
        let b2 = 3.0 * u * t * t;
        let b3 = t * t * t;
        Point2::new(
            b0 * self.p0.x + b1 * self.p1.x + b2 * self.p2.x + b3 * self.p3.x,
            b0 * self.p0.y + b1 * self.p1.y + b2 * self.p2.y + b3 * self.p3.y,
        )
    }
}
