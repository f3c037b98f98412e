//! Output of the sketch pipeline.
//!
//! [`SketchImage`] holds one [`ColorMatch`](crate::palette::ColorMatch) per
//! grid cell together with the palette that produced them, and renders
//! them on demand:
//!
//! - **Matches** ([`SketchImage::matches`]): entry index and trace per cell
//! - **RGB** ([`SketchImage::to_rgb`]): the chosen reference colors
//! - **Usage** ([`SketchImage::usage`]): heavy/light counts per entry

mod sketch_image;

pub use sketch_image::{quantize, EntryUsage, SketchImage};
