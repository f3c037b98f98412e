//! High-level API: the [`Sketcher`] builder and the unified [`SketchError`].

mod builder;
mod error;

pub use builder::{Sketcher, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
pub use error::SketchError;
