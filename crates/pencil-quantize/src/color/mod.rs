//! Color types and distance metrics
//!
//! - [`Rgb`]: 8-bit reference color used by buffers and palettes
//! - [`DistanceMetric`]: pluggable color distance for palette matching

mod distance;
mod rgb;

pub use distance::{DistanceMetric, ParseMetricError};
pub use rgb::Rgb;
