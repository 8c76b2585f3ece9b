use crate::error::{Result, ScallopError};
use crate::math::polygon_2d::Winding;
use crate::math::vector_2d::midpoint_2d;
use crate::math::Point2;

/// A vertex of a closed loop annotated with how far along the perimeter it
/// sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MorphPoint {
    /// Fraction of the total perimeter walked to reach this vertex, in
    /// `[0, 1)`.
    pub progress: f64,
    /// The vertex position.
    pub position: Point2,
}

/// Annotates each vertex of a closed loop with its cumulative-perimeter
/// progress. The first vertex gets progress 0.
///
/// A zero-length perimeter yields all-zero progress instead of dividing by
/// zero.
#[must_use]
pub fn progress_points(points: &[Point2]) -> Vec<MorphPoint> {
    let n = points.len();
    let mut distances = Vec::with_capacity(n);
    for i in 0..n {
        distances.push((points[(i + 1) % n] - points[i]).norm());
    }
    let total: f64 = distances.iter().sum();

    let mut result = Vec::with_capacity(n);
    let mut walked = 0.0;
    for i in 0..n {
        let progress = if total > 0.0 { walked / total } else { 0.0 };
        result.push(MorphPoint {
            progress,
            position: points[i],
        });
        walked += distances[i];
    }
    result
}

/// Prepares two closed polygons for morphing.
///
/// Mismatched windings are aligned by reversing the second polygon, vertex
/// counts are equalized by repeatedly splitting the largest perimeter gap of
/// the smaller polygon, and the larger polygon is cyclically rotated so the
/// vertex nearest the smaller polygon's first vertex pairs with it. The
/// returned sequences have equal length, correspond index by index, and
/// keep the argument order.
///
/// # Errors
///
/// Returns [`ScallopError::TooFewVertices`] if either polygon has fewer
/// than 3 vertices.
pub fn equalize_and_map(a: &[Point2], b: &[Point2]) -> Result<(Vec<Point2>, Vec<Point2>)> {
    if a.len() < 3 {
        return Err(ScallopError::TooFewVertices { count: a.len() });
    }
    if b.len() < 3 {
        return Err(ScallopError::TooFewVertices { count: b.len() });
    }

    let first = a.to_vec();
    let mut second = b.to_vec();
    if Winding::of(&first) != Winding::of(&second) {
        second.reverse();
    }

    // Only the smaller polygon ever grows points.
    let swapped = first.len() > second.len();
    let (small, large) = if swapped {
        (second, first)
    } else {
        (first, second)
    };

    let small_points = balance_points(&progress_points(&small), large.len());
    let large_points = progress_points(&large);

    let offset = nearest_offset(small_points[0].position, &large_points);
    log::debug!(
        "morph map: {} and {} vertices equalized to {}, rotation offset {offset}",
        small.len(),
        large.len(),
        large_points.len()
    );

    let n = large_points.len();
    let mut mapped_small = Vec::with_capacity(n);
    let mut mapped_large = Vec::with_capacity(n);
    for i in 0..n {
        mapped_small.push(small_points[i].position);
        mapped_large.push(large_points[(i + offset) % n].position);
    }

    if swapped {
        Ok((mapped_large, mapped_small))
    } else {
        Ok((mapped_small, mapped_large))
    }
}

/// Linear interpolation between two index-paired vertex sequences, as
/// produced by [`equalize_and_map`].
///
/// `alpha` at or below 0 returns `a` unchanged and at or above 1 returns
/// `b` unchanged, so the endpoints reproduce the inputs exactly.
#[must_use]
pub fn interpolate(a: &[Point2], b: &[Point2], alpha: f64) -> Vec<Point2> {
    if alpha <= 0.0 {
        return a.to_vec();
    }
    if alpha >= 1.0 {
        return b.to_vec();
    }
    a.iter()
        .zip(b.iter())
        .map(|(p, q)| Point2::new(p.x + (q.x - p.x) * alpha, p.y + (q.y - p.y) * alpha))
        .collect()
}

/// Samples the loop boundary at perimeter progress `t`.
///
/// `t` wraps modulo 1, so any real value is valid. The closing segment runs
/// from the last point back to the first, covering the progress range up to
/// 1. Returns `None` for an empty loop; a `t` below the first point's
/// progress (possible when the input does not start at 0) returns the first
/// point.
#[must_use]
pub fn point_at_progress(shape: &[MorphPoint], t: f64) -> Option<MorphPoint> {
    let first = shape.first()?;
    let t = t.rem_euclid(1.0);
    for i in 0..shape.len() {
        let from = shape[i];
        let to = if i + 1 == shape.len() {
            MorphPoint {
                progress: 1.0,
                position: first.position,
            }
        } else {
            shape[i + 1]
        };
        if from.progress <= t && t < to.progress {
            return Some(lerp_segment(from, to, t));
        }
    }
    Some(*first)
}

/// A morph between two polygons with the vertex correspondence resolved
/// once up front.
///
/// Construction runs the full equalization; [`Morph::sample`] then only
/// interpolates, which is all an animation loop should pay per frame.
#[derive(Debug, Clone)]
pub struct Morph {
    start: Vec<Point2>,
    end: Vec<Point2>,
}

impl Morph {
    /// Maps `a` onto `b`.
    ///
    /// # Errors
    ///
    /// Returns [`ScallopError::TooFewVertices`] if either polygon has fewer
    /// than 3 vertices.
    pub fn new(a: &[Point2], b: &[Point2]) -> Result<Self> {
        let (start, end) = equalize_and_map(a, b)?;
        Ok(Self { start, end })
    }

    /// The equalized start vertices (`a` at blend 0).
    #[must_use]
    pub fn start(&self) -> &[Point2] {
        &self.start
    }

    /// The equalized end vertices (`b` at blend 1).
    #[must_use]
    pub fn end(&self) -> &[Point2] {
        &self.end
    }

    /// Vertex positions at blend parameter `alpha` in `[0, 1]`.
    #[must_use]
    pub fn sample(&self, alpha: f64) -> Vec<Point2> {
        interpolate(&self.start, &self.end, alpha)
    }
}

/// Grows `points` to `target` entries by repeatedly splitting the largest
/// progress gap at its coordinate midpoint.
fn balance_points(points: &[MorphPoint], target: usize) -> Vec<MorphPoint> {
    let mut result = points.to_vec();
    while result.len() < target {
        let mut largest_gap = -1.0;
        let mut insert_at = 1;
        for i in 0..result.len() {
            let from = result[i];
            let to = result[(i + 1) % result.len()];
            // The gap to the loop start wraps through progress 1.
            let gap = if to.progress > from.progress {
                to.progress - from.progress
            } else {
                (1.0 - from.progress) + to.progress
            };
            if gap > largest_gap {
                largest_gap = gap;
                insert_at = i + 1;
            }
        }

        let from = result[insert_at - 1];
        let to = result[insert_at % result.len()];
        result.insert(
            insert_at,
            MorphPoint {
                progress: (from.progress + largest_gap / 2.0) % 1.0,
                position: midpoint_2d(from.position, to.position),
            },
        );
    }
    result
}

/// Index of the point in `candidates` closest to `anchor`; earliest wins on
/// ties.
fn nearest_offset(anchor: Point2, candidates: &[MorphPoint]) -> usize {
    let mut best = 0;
    let mut best_distance = f64::INFINITY;
    for (i, candidate) in candidates.iter().enumerate() {
        let distance = (candidate.position - anchor).norm();
        if distance < best_distance {
            best_distance = distance;
            best = i;
        }
    }
    best
}

/// Interpolates within one segment; a non-positive progress span returns
/// the segment start.
fn lerp_segment(from: MorphPoint, to: MorphPoint, t: f64) -> MorphPoint {
    let span = to.progress - from.progress;
    if span <= 0.0 {
        return from;
    }
    let local = (t - from.progress) / span;
    MorphPoint {
        progress: t,
        position: Point2::new(
            from.position.x + (to.position.x - from.position.x) * local,
            from.position.y + (to.position.y - from.position.y) * local,
        ),
    }
}
