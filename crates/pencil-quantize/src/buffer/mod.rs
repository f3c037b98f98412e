//! Pixel buffer storage
//!
//! [`PixelBuffer`] is the single owned image type used for decoded input,
//! the resampler's intermediate pass and its destination.

mod error;
mod pixel_buffer;

pub use error::BufferError;
pub use pixel_buffer::{PixelBuffer, CHANNELS};
