use super::corner::{CornerRounding, RoundedCorner};
use super::cubic::Cubic;
use crate::error::{Result, ScallopError};
use crate::math::polygon_2d::{vertex_mean_2d, Winding};
use crate::math::Point2;

/// Classifies an outline feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    /// A rounded (possibly degenerate) polygon corner.
    Corner,
    /// The straight remainder of a polygon side.
    Edge,
}

/// One piece of a built outline: a corner with its curve triple, or the
/// straight edge connecting two corners.
#[derive(Debug, Clone)]
pub struct Feature {
    kind: FeatureKind,
    curves: Vec<Cubic>,
    convex: bool,
}

impl Feature {
    #[must_use]
    pub fn kind(&self) -> FeatureKind {
        self.kind
    }

    /// The curves of this feature in traversal order: three for a rounded
    /// corner, one otherwise.
    #[must_use]
    pub fn curves(&self) -> &[Cubic] {
        &self.curves
    }

    /// Whether the feature turns with the polygon winding. Edges always
    /// report convex.
    #[must_use]
    pub fn is_convex(&self) -> bool {
        self.convex
    }
}

/// How rounding parameters map onto the polygon's vertices.
#[derive(Debug, Clone)]
pub enum RoundingSpec {
    /// The same rounding at every corner.
    Uniform(CornerRounding),
    /// One rounding per corner, in vertex order.
    PerVertex(Vec<CornerRounding>),
}

/// Builds a rounded outline from a polygon skeleton.
///
/// Vertices are flat `[x0, y0, x1, y1, ...]` coordinates on a y-down
/// canvas, traversed in order with an implicit closing edge.
///
/// # Algorithm
///
/// 1. Pair the coordinates into vertices and classify the global winding.
/// 2. Derive a [`RoundedCorner`] per vertex, which knows how much edge the
///    requested rounding wants to consume on each side of its tip.
/// 3. Resolve every edge's cut budget: when the two adjacent corners
///    together want more than the side's length, scale the arc cuts back
///    proportionally; smoothing extensions only ever get the space left
///    after all arc cuts are honored.
/// 4. Emit one corner feature and one straight edge feature per vertex,
///    anchoring each edge where its neighbor corner's granted cut ends.
#[derive(Debug)]
pub struct OutlineBuilder {
    vertices: Vec<f64>,
    rounding: RoundingSpec,
    center: Option<Point2>,
}

impl OutlineBuilder {
    #[must_use]
    pub fn new(vertices: Vec<f64>, rounding: RoundingSpec) -> Self {
        Self {
            vertices,
            rounding,
            center: None,
        }
    }

    /// Overrides the computed center (vertex mean) with an explicit one.
    #[must_use]
    pub fn with_center(mut self, center: Point2) -> Self {
        self.center = Some(center);
        self
    }

    /// Builds the outline.
    ///
    /// # Errors
    ///
    /// Returns [`ScallopError::OddVertexList`] for an odd coordinate count,
    /// [`ScallopError::TooFewVertices`] for fewer than 3 vertices, and
    /// [`ScallopError::RoundingCountMismatch`] when a per-vertex rounding
    /// list does not match the vertex count.
    pub fn build(&self) -> Result<RoundedPolygon> {
        let count = self.vertices.len();
        if count % 2 != 0 {
            return Err(ScallopError::OddVertexList { count });
        }
        let n = count / 2;
        if n < 3 {
            return Err(ScallopError::TooFewVertices { count: n });
        }
        if let RoundingSpec::PerVertex(list) = &self.rounding {
            if list.len() != n {
                return Err(ScallopError::RoundingCountMismatch {
                    rounding: list.len(),
                    vertices: n,
                });
            }
        }

        let points: Vec<Point2> = self
            .vertices
            .chunks_exact(2)
            .map(|pair| Point2::new(pair[0], pair[1]))
            .collect();
        let winding = Winding::of(&points);

        let corners: Vec<RoundedCorner> = (0..n)
            .map(|i| {
                RoundedCorner::new(
                    points[(i + n - 1) % n],
                    points[i],
                    points[(i + 1) % n],
                    self.rounding_for(i),
                    winding,
                )
            })
            .collect();

        // Cut budget per edge, indexed by the edge's start vertex.
        let cut_adjusts: Vec<(f64, f64)> = (0..n)
            .map(|i| {
                let side_len = (points[(i + 1) % n] - points[i]).norm();
                edge_cut_ratios(&corners[i], &corners[(i + 1) % n], side_len)
            })
            .collect();

        let tight = cut_adjusts
            .iter()
            .filter(|(round, smooth)| *round < 1.0 || *smooth < 1.0)
            .count();
        log::trace!("built outline: {n} vertices, {winding:?} winding, {tight} constrained edges");

        let mut features = Vec::with_capacity(2 * n);
        for i in 0..n {
            let corner = &corners[i];
            let granted_prev = granted_cut(corner, cut_adjusts[(i + n - 1) % n]);
            let granted_next = granted_cut(corner, cut_adjusts[i]);
            let built = corner.cubics(granted_prev, granted_next);
            let corner_end = built.curves.last().map_or(corner.tip(), |c| c.p3);
            features.push(Feature {
                kind: FeatureKind::Corner,
                curves: built.curves,
                convex: corner.is_convex(),
            });

            // The straight edge runs up to where the next corner's rounding
            // begins, measured with the shared edge's budget.
            let next = &corners[(i + 1) % n];
            let edge_end = next.start_point(granted_cut(next, cut_adjusts[i]));
            features.push(Feature {
                kind: FeatureKind::Edge,
                curves: vec![Cubic::straight_line(corner_end, edge_end)],
                convex: true,
            });
        }

        let center = self.center.unwrap_or_else(|| vertex_mean_2d(&points));
        Ok(RoundedPolygon { features, center })
    }

    fn rounding_for(&self, i: usize) -> CornerRounding {
        match &self.rounding {
            RoundingSpec::Uniform(rounding) => *rounding,
            RoundingSpec::PerVertex(list) => list[i],
        }
    }
}

/// A closed outline of alternating corner and edge features.
#[derive(Debug, Clone)]
pub struct RoundedPolygon {
    features: Vec<Feature>,
    center: Point2,
}

impl RoundedPolygon {
    /// The outline features in traversal order, two per skeleton vertex:
    /// the corner, then the straight edge leading to the next corner.
    #[must_use]
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// The outline center: the explicit override or the skeleton vertex
    /// mean.
    #[must_use]
    pub fn center(&self) -> Point2 {
        self.center
    }

    /// All curves across all features, flattened in traversal order.
    pub fn curves(&self) -> impl Iterator<Item = &Cubic> + '_ {
        self.features.iter().flat_map(|f| f.curves.iter())
    }
}

/// Ratios `(round, smoothing)` of their wanted cuts that the two corners of
/// one edge can actually take, resolved against the edge length. Arc cuts
/// are honored before smoothing extensions.
fn edge_cut_ratios(c1: &RoundedCorner, c2: &RoundedCorner, side_len: f64) -> (f64, f64) {
    let round_sum = c1.expected_round_cut() + c2.expected_round_cut();
    let total_sum = c1.expected_cut() + c2.expected_cut();
    if round_sum > side_len {
        (side_len / round_sum, 0.0)
    } else if total_sum > side_len {
        (1.0, (side_len - round_sum) / (total_sum - round_sum))
    } else {
        (1.0, 1.0)
    }
}

/// Recombines one corner's cut components under the granted edge ratios.
fn granted_cut(corner: &RoundedCorner, (round_ratio, smooth_ratio): (f64, f64)) -> f64 {
    corner.expected_round_cut() * round_ratio
        + (corner.expected_cut() - corner.expected_round_cut()) * smooth_ratio
}
