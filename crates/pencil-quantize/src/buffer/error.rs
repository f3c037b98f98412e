//! Error type for pixel buffer construction and copying.

use std::fmt;

/// Error type for [`PixelBuffer`](super::PixelBuffer) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Width or height is zero
    ZeroDimension {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
    /// `width * height * 3` bytes cannot be addressed
    TooLarge {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
    /// Raw sample storage does not hold exactly `width * height * 3` bytes
    LengthMismatch {
        /// Expected byte count
        expected: usize,
        /// Provided byte count
        actual: usize,
    },
    /// Source and destination dimensions differ for a plain copy
    DimensionMismatch {
        /// Source dimensions (width, height)
        src: (u32, u32),
        /// Destination dimensions (width, height)
        dst: (u32, u32),
    },
}

impl fmt::Display for BufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BufferError::ZeroDimension { width, height } => {
                write!(f, "buffer dimensions must be positive, got {}x{}", width, height)
            }
            BufferError::TooLarge { width, height } => {
                write!(f, "buffer dimensions {}x{} are too large", width, height)
            }
            BufferError::LengthMismatch { expected, actual } => {
                write!(
                    f,
                    "buffer length mismatch: expected {} bytes, got {}",
                    expected, actual
                )
            }
            BufferError::DimensionMismatch { src, dst } => {
                write!(
                    f,
                    "cannot copy {}x{} buffer into {}x{} buffer",
                    src.0, src.1, dst.0, dst.1
                )
            }
        }
    }
}

impl std::error::Error for BufferError {}
