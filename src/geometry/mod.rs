pub mod corner;
pub mod cubic;
pub mod rounded_polygon;

pub use corner::{CornerCurves, CornerRounding, RoundedCorner};
pub use cubic::Cubic;
pub use rounded_polygon::{Feature, FeatureKind, OutlineBuilder, RoundedPolygon, RoundingSpec};
