pub mod error;
pub mod geometry;
pub mod math;
pub mod morph;
pub mod presets;

pub use error::{Result, ScallopError};
