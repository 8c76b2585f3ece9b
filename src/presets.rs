use crate::error::Result;
use crate::geometry::{CornerRounding, OutlineBuilder, RoundedPolygon, RoundingSpec};

// Rounding styles. Radii are fractions of the shape size, so they scale
// together with the vertex coordinates.

/// Corner left sharp.
pub const SHARP: CornerRounding = CornerRounding {
    radius: 0.0,
    smoothing: 0.0,
};

/// Small radius, heavily eased.
pub const SOFT: CornerRounding = CornerRounding {
    radius: 0.02,
    smoothing: 0.8,
};

/// Medium radius with the full smoothing extension.
pub const DEEP: CornerRounding = CornerRounding {
    radius: 0.04,
    smoothing: 1.0,
};

/// Plain circular rounding.
pub const ROUND: CornerRounding = CornerRounding {
    radius: 0.035,
    smoothing: 0.0,
};

/// A quarter of the shape size, plain arc.
pub const MEDIUM_ROUND: CornerRounding = CornerRounding {
    radius: 0.25,
    smoothing: 0.0,
};

/// Dominating radius that usually hits the edge cut limits.
pub const VERY_ROUND: CornerRounding = CornerRounding {
    radius: 0.75,
    smoothing: 0.0,
};

/// Like [`ROUND`] but eased into the edges.
pub const SMOOTH: CornerRounding = CornerRounding {
    radius: 0.035,
    smoothing: 0.8,
};

/// Wide eased rounding for concave notches.
pub const VALLEY: CornerRounding = CornerRounding {
    radius: 0.1,
    smoothing: 1.0,
};

/// A canonical shape: a vertex skeleton with per-vertex rounding, scaled
/// to a target size.
#[derive(Debug, Clone)]
pub struct PresetShape {
    vertices: Vec<f64>,
    rounding: Vec<CornerRounding>,
}

impl PresetShape {
    fn new(size: f64, table: &[((f64, f64), CornerRounding)]) -> Self {
        let mut vertices = Vec::with_capacity(table.len() * 2);
        let mut rounding = Vec::with_capacity(table.len());
        for &((x, y), corner) in table {
            vertices.push(x * size);
            vertices.push(y * size);
            rounding.push(CornerRounding {
                radius: corner.radius * size,
                smoothing: corner.smoothing,
            });
        }
        Self { vertices, rounding }
    }

    /// Flat `[x0, y0, x1, y1, ...]` skeleton coordinates.
    #[must_use]
    pub fn vertices(&self) -> &[f64] {
        &self.vertices
    }

    /// Per-vertex rounding, parallel to [`PresetShape::vertices`].
    #[must_use]
    pub fn rounding(&self) -> &[CornerRounding] {
        &self.rounding
    }

    /// Builds the rounded outline of this shape.
    ///
    /// # Errors
    ///
    /// Propagates outline validation errors; the built-in shapes always
    /// pass validation.
    pub fn outline(&self) -> Result<RoundedPolygon> {
        OutlineBuilder::new(
            self.vertices.clone(),
            RoundingSpec::PerVertex(self.rounding.clone()),
        )
        .build()
    }
}

/// Four heavily smoothed corners.
#[must_use]
pub fn puffy_square(size: f64) -> PresetShape {
    PresetShape::new(
        size,
        &[
            ((0.20, 0.20), SMOOTH),
            ((0.80, 0.20), SMOOTH),
            ((0.80, 0.80), SMOOTH),
            ((0.20, 0.80), SMOOTH),
        ],
    )
}

/// A badge with a rounded top and a smoothed point at the bottom.
#[must_use]
pub fn shield(size: f64) -> PresetShape {
    PresetShape::new(
        size,
        &[
            ((0.20, 0.20), ROUND),
            ((0.80, 0.20), ROUND),
            ((0.80, 0.50), SMOOTH),
            ((0.50, 0.90), SMOOTH),
            ((0.20, 0.50), SMOOTH),
        ],
    )
}

/// Four rounded petals pinched together at the center.
#[must_use]
pub fn clover_flower(size: f64) -> PresetShape {
    PresetShape::new(
        size,
        &[
            ((0.50, 0.05), ROUND),
            ((0.65, 0.18), ROUND),
            ((0.5, 0.50), SHARP),
            ((0.95, 0.50), ROUND),
            ((0.82, 0.65), ROUND),
            ((0.5, 0.5), SHARP),
            ((0.50, 0.95), ROUND),
            ((0.35, 0.82), ROUND),
            ((0.5, 0.5), SHARP),
            ((0.05, 0.50), ROUND),
            ((0.18, 0.35), ROUND),
            ((0.5, 0.5), SHARP),
        ],
    )
}

/// Five sharp spikes with eased valleys between them.
#[must_use]
pub fn star(size: f64) -> PresetShape {
    PresetShape::new(
        size,
        &[
            ((0.50, 0.05), SHARP),
            ((0.60, 0.40), VALLEY),
            ((0.95, 0.40), SHARP),
            ((0.70, 0.60), VALLEY),
            ((0.80, 0.95), SHARP),
            ((0.50, 0.75), VALLEY),
            ((0.20, 0.95), SHARP),
            ((0.30, 0.60), VALLEY),
            ((0.05, 0.40), SHARP),
            ((0.40, 0.40), VALLEY),
        ],
    )
}

/// A wide capsule.
#[must_use]
pub fn pill(size: f64) -> PresetShape {
    PresetShape::new(
        size,
        &[
            ((0.15, 0.35), ROUND),
            ((0.85, 0.35), ROUND),
            ((0.85, 0.65), ROUND),
            ((0.15, 0.65), ROUND),
        ],
    )
}

/// An irregular five-sided blob, all corners smoothed.
#[must_use]
pub fn organic_blob(size: f64) -> PresetShape {
    PresetShape::new(
        size,
        &[
            ((0.50, 0.15), SMOOTH),
            ((0.85, 0.25), SMOOTH),
            ((0.75, 0.85), SMOOTH),
            ((0.25, 0.70), SMOOTH),
            ((0.10, 0.40), SMOOTH),
        ],
    )
}

/// A rectangle with deep eased notches on all four sides.
#[must_use]
pub fn concave_rectangle(size: f64) -> PresetShape {
    PresetShape::new(
        size,
        &[
            ((0.10, 0.1), ROUND),
            ((0.50, 0.40), VALLEY),
            ((0.9, 0.10), ROUND),
            ((0.60, 0.50), VALLEY),
            ((0.9, 0.9), ROUND),
            ((0.50, 0.6), VALLEY),
            ((0.1, 0.9), ROUND),
            ((0.40, 0.50), VALLEY),
        ],
    )
}

/// A twelve-lobed scalloped cookie, alternating peaks and cave-ins.
#[must_use]
pub fn cookie_12(size: f64) -> PresetShape {
    PresetShape::new(
        size,
        &[
            ((0.50, 0.05), SMOOTH),
            ((0.55, 0.40), VALLEY),
            ((0.72, 0.11), SMOOTH),
            ((0.65, 0.45), VALLEY),
            ((0.89, 0.28), SMOOTH),
            ((0.70, 0.50), VALLEY),
            ((0.95, 0.50), SMOOTH),
            ((0.70, 0.55), VALLEY),
            ((0.89, 0.72), SMOOTH),
            ((0.65, 0.60), VALLEY),
            ((0.72, 0.89), SMOOTH),
            ((0.55, 0.65), VALLEY),
            ((0.50, 0.95), SMOOTH),
            ((0.45, 0.65), VALLEY),
            ((0.28, 0.89), SMOOTH),
            ((0.35, 0.60), VALLEY),
            ((0.11, 0.72), SMOOTH),
            ((0.30, 0.55), VALLEY),
            ((0.05, 0.50), SMOOTH),
            ((0.30, 0.50), VALLEY),
            ((0.11, 0.28), SMOOTH),
            ((0.35, 0.45), VALLEY),
            ((0.28, 0.11), SMOOTH),
            ((0.45, 0.40), VALLEY),
        ],
    )
}

/// An eight-lobed scalloped cookie.
#[must_use]
pub fn cookie_8(size: f64) -> PresetShape {
    PresetShape::new(
        size,
        &[
            ((0.500, 0.050), SMOOTH),
            ((0.622, 0.204), VALLEY),
            ((0.818, 0.182), SMOOTH),
            ((0.796, 0.378), VALLEY),
            ((0.950, 0.500), SMOOTH),
            ((0.796, 0.622), VALLEY),
            ((0.818, 0.818), SMOOTH),
            ((0.622, 0.796), VALLEY),
            ((0.500, 0.950), SMOOTH),
            ((0.378, 0.796), VALLEY),
            ((0.182, 0.818), SMOOTH),
            ((0.204, 0.622), VALLEY),
            ((0.050, 0.500), SMOOTH),
            ((0.204, 0.378), VALLEY),
            ((0.182, 0.182), SMOOTH),
            ((0.378, 0.204), VALLEY),
        ],
    )
}

/// A hand-fan silhouette dominated by one very round blade tip.
#[must_use]
pub fn fan(size: f64) -> PresetShape {
    PresetShape::new(
        size,
        &[
            ((0.10, 0.10), MEDIUM_ROUND),
            ((0.90, 0.10), VERY_ROUND),
            ((0.9, 0.9), MEDIUM_ROUND),
            ((0.10, 0.90), MEDIUM_ROUND),
        ],
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::FeatureKind;

    #[test]
    fn all_presets_build_valid_outlines() {
        let shapes: [(&str, fn(f64) -> PresetShape); 10] = [
            ("puffy_square", puffy_square),
            ("shield", shield),
            ("clover_flower", clover_flower),
            ("star", star),
            ("pill", pill),
            ("organic_blob", organic_blob),
            ("concave_rectangle", concave_rectangle),
            ("cookie_12", cookie_12),
            ("cookie_8", cookie_8),
            ("fan", fan),
        ];

        for (name, make) in shapes {
            let shape = make(1000.0);
            let n = shape.rounding().len();
            assert_eq!(shape.vertices().len(), 2 * n, "{name}: vertex pairing");

            let outline = shape.outline().unwrap_or_else(|e| panic!("{name}: {e}"));
            assert_eq!(outline.features().len(), 2 * n, "{name}: feature count");

            for (i, feature) in outline.features().iter().enumerate() {
                let expected = if i % 2 == 0 {
                    FeatureKind::Corner
                } else {
                    FeatureKind::Edge
                };
                assert_eq!(feature.kind(), expected, "{name}: feature {i}");

                // Corner curve triples must join without gaps even when the
                // edge budgets squeezed the cuts.
                for pair in feature.curves().windows(2) {
                    let gap = (pair[1].p0 - pair[0].p3).norm();
                    assert!(gap < 1e-3, "{name}: feature {i} gap {gap}");
                }
                for curve in feature.curves() {
                    for p in [curve.p0, curve.p1, curve.p2, curve.p3] {
                        assert!(
                            p.x.is_finite() && p.y.is_finite(),
                            "{name}: feature {i} has a non-finite point"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn size_scales_coordinates_and_radii() {
        let shape = puffy_square(100.0);
        assert!((shape.vertices()[0] - 20.0).abs() < 1e-9);
        assert!((shape.vertices()[1] - 20.0).abs() < 1e-9);
        assert!((shape.rounding()[0].radius - 3.5).abs() < 1e-9);
        assert!((shape.rounding()[0].smoothing - 0.8).abs() < 1e-9);
    }

    #[test]
    fn star_alternates_spikes_and_valleys() {
        let shape = star(1.0);
        for (i, rounding) in shape.rounding().iter().enumerate() {
            if i % 2 == 0 {
                assert!(rounding.radius.abs() < 1e-9, "spike {i} must stay sharp");
            } else {
                assert!((rounding.radius - 0.1).abs() < 1e-9, "valley {i}");
                assert!((rounding.smoothing - 1.0).abs() < 1e-9, "valley {i}");
            }
        }
    }

    #[test]
    fn cookie_12_has_24_vertices() {
        let shape = cookie_12(1.0);
        assert_eq!(shape.rounding().len(), 24);
        assert_eq!(shape.vertices().len(), 48);
    }
}
