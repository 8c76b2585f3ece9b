use super::cubic::Cubic;
use crate::math::intersect_2d::{line_line_intersect_2d, point_at};
use crate::math::polygon_2d::Winding;
use crate::math::vector_2d::{lerp_2d, midpoint_2d, rotate_90, unit_or_zero};
use crate::math::{Point2, Vector2, DISTANCE_EPSILON};

/// Rounding parameters for a single polygon corner.
///
/// `radius` is the radius of the circle inscribed into the corner.
/// `smoothing` in `[0, 1]` stretches the rounding beyond the circular arc:
/// at 0 the corner is a plain arc joined to the straight edges, at 1 the
/// transition curves consume all the space the arc does not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerRounding {
    pub radius: f64,
    pub smoothing: f64,
}

impl CornerRounding {
    /// A corner left entirely sharp.
    pub const UNROUNDED: Self = Self {
        radius: 0.0,
        smoothing: 0.0,
    };

    /// Creates a rounding, clamping `radius` to be non-negative and
    /// `smoothing` into `[0, 1]`.
    #[must_use]
    pub fn new(radius: f64, smoothing: f64) -> Self {
        Self {
            radius: radius.max(0.0),
            smoothing: smoothing.clamp(0.0, 1.0),
        }
    }
}

/// The curves realizing one rounded corner, plus the rounding-circle center
/// they were built around.
#[derive(Debug, Clone)]
pub struct CornerCurves {
    /// One degenerate curve for a sharp corner, otherwise a flanking curve,
    /// the circular arc, and the mirrored flanking curve, in traversal order.
    pub curves: Vec<Cubic>,
    /// Center of the rounding circle; the corner tip itself when no rounding
    /// was applied.
    pub center: Point2,
}

/// Derived rounding geometry for one corner of a polygon skeleton.
///
/// Distances are measured from the corner tip along each adjacent edge.
/// `expected_round_cut` is how much edge the plain circular arc of the
/// requested radius would consume on each side; `expected_cut` additionally
/// includes the smoothing extension. The polygon builder compares these
/// against the actual edge lengths and hands back the cuts each side can
/// really afford.
#[derive(Debug, Clone)]
pub struct RoundedCorner {
    tip: Point2,
    toward_prev: Vector2,
    toward_next: Vector2,
    radius: f64,
    smoothing: f64,
    expected_round_cut: f64,
    convex: bool,
}

impl RoundedCorner {
    /// Builds the corner geometry for the skeleton sequence
    /// `prev -> tip -> next`, with `winding` being the traversal direction
    /// of the whole polygon.
    ///
    /// A zero-length adjacent edge makes the corner degenerate: zero cut,
    /// convex by default, no rounding applied.
    #[must_use]
    pub fn new(
        prev: Point2,
        tip: Point2,
        next: Point2,
        rounding: CornerRounding,
        winding: Winding,
    ) -> Self {
        let v_prev = prev - tip;
        let v_next = next - tip;
        let len_prev = v_prev.norm();
        let len_next = v_next.norm();
        if len_prev <= 0.0 || len_next <= 0.0 {
            return Self {
                tip,
                toward_prev: Vector2::zeros(),
                toward_next: Vector2::zeros(),
                radius: 0.0,
                smoothing: 0.0,
                expected_round_cut: 0.0,
                convex: true,
            };
        }

        let toward_prev = v_prev / len_prev;
        let toward_next = v_next / len_next;
        let cos_angle = toward_prev.dot(&toward_next);
        let sin_angle = (1.0 - cos_angle * cos_angle).max(0.0).sqrt();

        // Turn direction of the skeleton at this corner, interpreted in the
        // polygon's winding.
        let v_in = tip - prev;
        let v_out = next - tip;
        let cross = v_in.x * v_out.y - v_in.y * v_out.x;
        let convex = match winding {
            Winding::Clockwise => cross >= 0.0,
            Winding::CounterClockwise => cross <= 0.0,
        };

        // Tangent-length relation: the arc of the requested radius touches
        // each edge at this distance from the tip. Near-straight corners
        // get no cut at all.
        let expected_round_cut = if sin_angle > DISTANCE_EPSILON {
            rounding.radius * (cos_angle + 1.0) / sin_angle
        } else {
            0.0
        };

        Self {
            tip,
            toward_prev,
            toward_next,
            radius: rounding.radius,
            smoothing: rounding.smoothing,
            expected_round_cut,
            convex,
        }
    }

    /// The corner vertex itself.
    #[must_use]
    pub fn tip(&self) -> Point2 {
        self.tip
    }

    /// Edge length the plain arc wants on each side of the tip.
    #[must_use]
    pub fn expected_round_cut(&self) -> f64 {
        self.expected_round_cut
    }

    /// Edge length the arc plus its smoothing extension wants on each side.
    #[must_use]
    pub fn expected_cut(&self) -> f64 {
        (1.0 + self.smoothing) * self.expected_round_cut
    }

    /// Whether the corner turns with the polygon winding.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        self.convex
    }

    /// Point on the edge toward the previous vertex at `allowed_cut` from
    /// the tip. The builder uses it to end the straight edge that precedes
    /// this corner.
    #[must_use]
    pub fn start_point(&self, allowed_cut: f64) -> Point2 {
        self.tip + self.toward_prev * allowed_cut
    }

    /// Generates the curves for this corner, given the cut each adjacent
    /// edge actually granted.
    ///
    /// The rounding keeps the arc symmetric by working with the smaller of
    /// the two cuts; when that is less than the corner wanted, the radius
    /// shrinks proportionally so the tangent relation still holds. Corners
    /// with no radius, no room, or degenerate edges collapse to a single
    /// point curve at the tip.
    #[must_use]
    pub fn cubics(&self, allowed_cut_prev: f64, allowed_cut_next: f64) -> CornerCurves {
        let allowed_cut = allowed_cut_prev.min(allowed_cut_next);
        if allowed_cut < DISTANCE_EPSILON
            || self.expected_round_cut < DISTANCE_EPSILON
            || self.radius < DISTANCE_EPSILON
        {
            return CornerCurves {
                curves: vec![Cubic::straight_line(self.tip, self.tip)],
                center: self.tip,
            };
        }

        let actual_round_cut = allowed_cut.min(self.expected_round_cut);
        let smoothing_prev = self.actual_smoothing(allowed_cut_prev);
        let smoothing_next = self.actual_smoothing(allowed_cut_next);
        let actual_radius = self.radius * actual_round_cut / self.expected_round_cut;

        // The center sits on the angle bisector, at the hypotenuse of the
        // radius/cut right triangle formed with either tangent point.
        let center_distance =
            (actual_radius * actual_radius + actual_round_cut * actual_round_cut).sqrt();
        let center = self.tip + unit_or_zero(self.toward_prev + self.toward_next) * center_distance;

        let tangent_prev = self.tip + self.toward_prev * actual_round_cut;
        let tangent_next = self.tip + self.toward_next * actual_round_cut;

        let entry = self.flanking_curve(
            actual_round_cut,
            smoothing_prev,
            self.toward_prev,
            tangent_prev,
            tangent_next,
            center,
            actual_radius,
        );
        let exit = self
            .flanking_curve(
                actual_round_cut,
                smoothing_next,
                self.toward_next,
                tangent_next,
                tangent_prev,
                center,
                actual_radius,
            )
            .reversed();
        let arc = Cubic::circular_arc(center, entry.p3, exit.p0, self.convex);

        CornerCurves {
            curves: vec![entry, arc, exit],
            center,
        }
    }

    /// Smoothing share one side can honor with its granted cut: full above
    /// `expected_cut`, none at or below `expected_round_cut`, linear in
    /// between.
    fn actual_smoothing(&self, allowed_cut: f64) -> f64 {
        let expected_cut = self.expected_cut();
        if allowed_cut > expected_cut {
            self.smoothing
        } else if allowed_cut > self.expected_round_cut {
            self.smoothing * (allowed_cut - self.expected_round_cut)
                / (expected_cut - self.expected_round_cut)
        } else {
            0.0
        }
    }

    /// Transition curve easing from the straight edge into the arc on one
    /// side of the corner.
    ///
    /// The curve starts on the edge, pulled back by the smoothing share, and
    /// ends on the circle at the tangent point slid toward the arc midpoint
    /// by the same share. The outer control point anchors on the
    /// intersection of the edge line with the circle tangent at the curve
    /// end; the inner one sits two thirds of the way there, a tangent
    /// matching approximation that keeps the join with the edge direction
    /// visually smooth.
    #[allow(clippy::too_many_arguments)]
    fn flanking_curve(
        &self,
        actual_round_cut: f64,
        smoothing: f64,
        side_dir: Vector2,
        tangent_point: Point2,
        other_tangent: Point2,
        center: Point2,
        radius: f64,
    ) -> Cubic {
        let curve_start = self.tip + side_dir * (actual_round_cut * (1.0 + smoothing));

        let slid = lerp_2d(tangent_point, midpoint_2d(tangent_point, other_tangent), smoothing);
        let curve_end = center + unit_or_zero(slid - center) * radius;

        // Circle tangent at the curve end, unnormalized (length = radius) so
        // the parallelism epsilon scales with the corner size.
        let circle_tangent = rotate_90(curve_end - center);
        let anchor_end = line_line_intersect_2d(
            &self.tip,
            &side_dir,
            &curve_end,
            &circle_tangent,
            DISTANCE_EPSILON,
        )
        .map_or(tangent_point, |(t, _)| point_at(&self.tip, &side_dir, t));

        let anchor_start = Point2::new(
            (curve_start.x + 2.0 * anchor_end.x) / 3.0,
            (curve_start.y + 2.0 * anchor_end.y) / 3.0,
        );
        Cubic::new(curve_start, anchor_start, anchor_end, curve_end)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::SQRT_2;

    const TOL: f64 = 1e-9;

    fn assert_point_near(p: Point2, x: f64, y: f64, tol: f64, label: &str) {
        assert!(
            (p.x - x).abs() < tol && (p.y - y).abs() < tol,
            "{label}: ({}, {}) not near ({x}, {y})",
            p.x,
            p.y
        );
    }

    /// Right-angle corner at the origin, edges of length 1 toward
    /// `(-1, 0)` and `(0, 1)`, convex under clockwise winding.
    fn right_angle(rounding: CornerRounding) -> RoundedCorner {
        RoundedCorner::new(
            Point2::new(-1.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(0.0, 1.0),
            rounding,
            Winding::Clockwise,
        )
    }

    // ── expected cut distances ──

    #[test]
    fn right_angle_expected_cuts() {
        let corner = right_angle(CornerRounding::new(0.5, 0.0));
        // At 90 degrees the tangent length equals the radius.
        assert!((corner.expected_round_cut() - 0.5).abs() < TOL);
        assert!((corner.expected_cut() - 0.5).abs() < TOL);
        assert!(corner.is_convex());
    }

    #[test]
    fn smoothing_extends_expected_cut() {
        let corner = right_angle(CornerRounding::new(0.5, 0.8));
        assert!((corner.expected_round_cut() - 0.5).abs() < TOL);
        assert!((corner.expected_cut() - 0.9).abs() < TOL, "cut={}", corner.expected_cut());
    }

    #[test]
    fn straight_corner_wants_no_cut() {
        // Collinear edges: nothing to round.
        let corner = RoundedCorner::new(
            Point2::new(-1.0, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            CornerRounding::new(0.5, 0.0),
            Winding::Clockwise,
        );
        assert!(corner.expected_round_cut().abs() < TOL);
        let result = corner.cubics(1.0, 1.0);
        assert_eq!(result.curves.len(), 1);
    }

    // ── arc placement ──

    #[test]
    fn unsmoothed_right_angle_arc() {
        let corner = right_angle(CornerRounding::new(0.5, 0.0));
        let result = corner.cubics(1.0, 1.0);
        assert_eq!(result.curves.len(), 3);
        assert_point_near(result.center, -0.5, 0.5, TOL, "center");

        // Without smoothing the flanks collapse onto the tangent points.
        let entry = result.curves[0];
        let exit = result.curves[2];
        assert_point_near(entry.p0, -0.5, 0.0, TOL, "entry start");
        assert_point_near(entry.p3, -0.5, 0.0, TOL, "entry end");
        assert_point_near(exit.p0, 0.0, 0.5, TOL, "exit start");
        assert_point_near(exit.p3, 0.0, 0.5, TOL, "exit end");

        // The arc midpoint bulges toward the tip.
        let mid = result.curves[1].point_at(0.5);
        let expected = SQRT_2 / 2.0 * 0.5;
        assert_point_near(mid, expected - 0.5, 0.5 - expected, 1e-6, "arc mid");
    }

    #[test]
    fn shrunk_cut_shrinks_radius() {
        let corner = right_angle(CornerRounding::new(0.5, 0.0));
        // Only half the wanted cut is available on one side.
        let result = corner.cubics(0.25, 1.0);
        assert_point_near(result.center, -0.25, 0.25, TOL, "center");
        assert_point_near(result.curves[0].p0, -0.25, 0.0, TOL, "entry start");
        assert_point_near(result.curves[2].p3, 0.0, 0.25, TOL, "exit end");
    }

    #[test]
    fn corner_curves_are_continuous() {
        for smoothing in [0.0, 0.4, 1.0] {
            let corner = right_angle(CornerRounding::new(0.3, smoothing));
            let result = corner.cubics(0.8, 0.8);
            assert_eq!(result.curves.len(), 3);
            for pair in result.curves.windows(2) {
                let gap = (pair[1].p0 - pair[0].p3).norm();
                assert!(gap < 1e-3, "smoothing {smoothing}: gap {gap}");
            }
        }
    }

    // ── smoothing behavior ──

    #[test]
    fn full_smoothing_flank_geometry() {
        let corner = right_angle(CornerRounding::new(0.5, 1.0));
        let result = corner.cubics(1.0, 1.0);
        let entry = result.curves[0];
        let arc = result.curves[1];
        let exit = result.curves[2];

        // The flank start consumes the whole granted cut.
        assert_point_near(entry.p0, -1.0, 0.0, 1e-6, "entry start");
        assert_point_near(exit.p3, 0.0, 1.0, 1e-6, "exit end");

        // Both flank ends meet at the arc midpoint, leaving a degenerate arc.
        let arc_mid_x = SQRT_2 / 2.0 * 0.5 - 0.5;
        let arc_mid_y = 0.5 - SQRT_2 / 2.0 * 0.5;
        assert_point_near(entry.p3, arc_mid_x, arc_mid_y, 1e-6, "entry end");
        assert!((arc.p3 - arc.p0).norm() < 1e-6, "arc must collapse");

        // Control points of the entry flank stay on the edge line (y = 0)
        // and land on the tangent-line intersection and its third point.
        let anchor_end_x = (SQRT_2 - 2.0) / 2.0;
        let anchor_start_x = (-1.0 + 2.0 * anchor_end_x) / 3.0;
        assert_point_near(entry.p2, anchor_end_x, 0.0, 1e-6, "entry anchor end");
        assert_point_near(entry.p1, anchor_start_x, 0.0, 1e-6, "entry anchor start");
    }

    #[test]
    fn smoothing_grants_differ_per_side() {
        let corner = right_angle(CornerRounding::new(0.5, 1.0));
        // Previous edge grants only the bare arc cut, next edge everything.
        let result = corner.cubics(0.5, 1.0);
        let entry = result.curves[0];
        let exit = result.curves[2];
        assert_point_near(entry.p0, -0.5, 0.0, 1e-6, "entry start stays at tangent");
        assert_point_near(exit.p3, 0.0, 1.0, 1e-6, "exit end fully smoothed");
    }

    // ── degenerate corners ──

    #[test]
    fn zero_radius_collapses_to_tip() {
        let corner = right_angle(CornerRounding::UNROUNDED);
        let result = corner.cubics(1.0, 1.0);
        assert_eq!(result.curves.len(), 1);
        let only = result.curves[0];
        assert_eq!(only.p0, corner.tip());
        assert_eq!(only.p3, corner.tip());
        assert_eq!(result.center, corner.tip());
    }

    #[test]
    fn zero_allowed_cut_collapses_to_tip() {
        let corner = right_angle(CornerRounding::new(0.5, 0.0));
        let result = corner.cubics(0.0, 1.0);
        assert_eq!(result.curves.len(), 1);
        assert_eq!(result.curves[0].p0, corner.tip());
    }

    #[test]
    fn degenerate_edge_makes_sharp_convex_corner() {
        let tip = Point2::new(2.0, 3.0);
        let corner = RoundedCorner::new(
            tip,
            tip,
            Point2::new(4.0, 3.0),
            CornerRounding::new(0.5, 1.0),
            Winding::Clockwise,
        );
        assert!(corner.expected_round_cut().abs() < TOL);
        assert!(corner.is_convex());
        assert_eq!(corner.start_point(0.7), tip);
        let result = corner.cubics(1.0, 1.0);
        assert_eq!(result.curves.len(), 1);
        assert_eq!(result.curves[0].p0, tip);
    }

    // ── winding and convexity ──

    #[test]
    fn convexity_follows_winding() {
        let make = |winding| {
            RoundedCorner::new(
                Point2::new(-1.0, 0.0),
                Point2::new(0.0, 0.0),
                Point2::new(0.0, 1.0),
                CornerRounding::new(0.2, 0.0),
                winding,
            )
        };
        assert!(make(Winding::Clockwise).is_convex());
        assert!(!make(Winding::CounterClockwise).is_convex());
    }

    #[test]
    fn start_point_walks_the_previous_edge() {
        let corner = right_angle(CornerRounding::new(0.5, 0.0));
        assert_point_near(corner.start_point(0.3), -0.3, 0.0, TOL, "start point");
    }

    // ── rounding parameter clamping ──

    #[test]
    fn corner_rounding_clamps() {
        let r = CornerRounding::new(-2.0, 7.0);
        assert!((r.radius - 0.0).abs() < TOL);
        assert!((r.smoothing - 1.0).abs() < TOL);
        let s = CornerRounding::new(1.0, -0.5);
        assert!((s.smoothing - 0.0).abs() < TOL);
    }
}
