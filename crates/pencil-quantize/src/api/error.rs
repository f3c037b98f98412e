//! Unified error type for the public API.
//!
//! [`SketchError`] wraps every error type of the crate for convenient `?`
//! propagation in application code.

use std::fmt;

use crate::buffer::BufferError;
use crate::palette::{PaletteError, ParseColorError};
use crate::resample::ResampleError;

/// Unified error type for the public API.
///
/// # Example
///
/// ```
/// use pencil_quantize::{Palette, SketchError};
///
/// fn load(text: &str) -> Result<Palette, SketchError> {
///     Ok(Palette::parse(text)?)
/// }
///
/// assert!(load("lead 000000").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum SketchError {
    /// Buffer construction error
    Buffer(BufferError),
    /// Resampling failed (bad parameters or unimplemented kernel)
    Resample(ResampleError),
    /// Palette validation or parse error
    Palette(PaletteError),
    /// Color parsing error
    ParseColor(ParseColorError),
}

impl SketchError {
    /// True if the pipeline failed only because the kernel has no
    /// implementation.
    pub fn is_not_implemented(&self) -> bool {
        matches!(self, SketchError::Resample(err) if err.is_not_implemented())
    }
}

impl fmt::Display for SketchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SketchError::Buffer(err) => write!(f, "buffer error: {}", err),
            SketchError::Resample(err) => write!(f, "resample error: {}", err),
            SketchError::Palette(err) => write!(f, "palette error: {}", err),
            SketchError::ParseColor(err) => write!(f, "color parse error: {}", err),
        }
    }
}

impl std::error::Error for SketchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SketchError::Buffer(err) => Some(err),
            SketchError::Resample(err) => Some(err),
            SketchError::Palette(err) => Some(err),
            SketchError::ParseColor(err) => Some(err),
        }
    }
}

impl From<BufferError> for SketchError {
    fn from(err: BufferError) -> Self {
        SketchError::Buffer(err)
    }
}

impl From<ResampleError> for SketchError {
    fn from(err: ResampleError) -> Self {
        SketchError::Resample(err)
    }
}

impl From<PaletteError> for SketchError {
    fn from(err: PaletteError) -> Self {
        SketchError::Palette(err)
    }
}

impl From<ParseColorError> for SketchError {
    fn from(err: ParseColorError) -> Self {
        SketchError::ParseColor(err)
    }
}
