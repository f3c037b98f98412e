#![allow(clippy::module_inception)]

//! pencil-quantize: pencil-sketch quantization of RGB images
//!
//! This library shrinks an image onto a small grid with a separable
//! resampler and maps every grid cell to the closest color of a two-tone
//! palette, producing a stylized "pencil sketch".
//!
//! # Quick Start
//!
//! The [`Sketcher`] builder is the primary entry point:
//!
//! ```
//! use pencil_quantize::{Palette, PixelBuffer, Rgb, Sketcher};
//!
//! let palette: Palette = "\
//! graphite 000000 555555
//! paper    ffffff cccccc
//! ".parse().unwrap();
//!
//! let src = PixelBuffer::from_pixels(2, 1, &[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
//! let sketch = Sketcher::new(palette).grid(4, 1).sketch(&src).unwrap();
//!
//! assert_eq!(sketch.matches().len(), 4);
//! assert_eq!(sketch.matches()[0].index, 0);
//! assert_eq!(sketch.matches()[3].index, 1);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! PixelBuffer (decoded RGB, any size)
//!     |
//!     v
//! resample()          horizontal pass -> dst_w x src_h intermediate
//!     |               vertical pass   -> dst_w x dst_h grid
//!     v
//! quantize()          Palette::find_closest() per cell
//!     |
//!     v
//! SketchImage         entry index + heavy/light per cell
//! ```
//!
//! # Palettes
//!
//! Every [`PaletteEntry`] carries two reference colors, a heavy (dense
//! stroke) and a light one. Matching scans every entry and both of its
//! colors with a [`DistanceMetric`] and keeps the first strict minimum, so
//! ties always go to the earlier entry and to heavy over light.
//!
//! # Color Arithmetic
//!
//! Interpolation and distances work on the 8-bit channel values as stored.
//! There is no gamma decoding; this is a stylization, not a color-accurate
//! resize.

pub mod api;
pub mod buffer;
pub mod color;
pub mod output;
pub mod palette;
pub mod resample;

#[cfg(test)]
mod domain_tests;

pub use api::{SketchError, Sketcher, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH};
pub use buffer::{BufferError, PixelBuffer, CHANNELS};
pub use color::{DistanceMetric, ParseMetricError, Rgb};
pub use output::{quantize, EntryUsage, SketchImage};
pub use palette::{ColorMatch, Palette, PaletteEntry, PaletteError, ParseColorError, Trace};
pub use resample::{
    axis_ratio, resample, resize, sample, Direction, KernelError, KernelType, ResampleError,
};
