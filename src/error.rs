use thiserror::Error;

/// Top-level error type for the scallop geometry library.
///
/// Every variant reports invalid caller input, raised before any outline or
/// morph geometry is computed. Numeric edge cases (zero radii, degenerate
/// corners, zero-length perimeters) degrade to well-defined output instead
/// of erroring.
#[derive(Debug, Error)]
pub enum ScallopError {
    #[error("vertex list holds {count} coordinates, expected an even number of x, y pairs")]
    OddVertexList { count: usize },

    #[error("polygon needs at least 3 vertices, got {count}")]
    TooFewVertices { count: usize },

    #[error("per-vertex rounding holds {rounding} entries for {vertices} vertices")]
    RoundingCountMismatch { rounding: usize, vertices: usize },
}

/// Convenience type alias for results using [`ScallopError`].
pub type Result<T> = std::result::Result<T, ScallopError>;
