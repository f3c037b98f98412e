//! Owned RGB24 pixel storage.

use super::error::BufferError;
use crate::color::Rgb;

/// Number of 8-bit samples per pixel.
pub const CHANNELS: usize = 3;

/// A rectangular RGB image with 3 interleaved 8-bit samples per pixel.
///
/// The buffer owns its storage and carries its own dimensions, so width,
/// height and stride can never disagree at a call site. Storage length is
/// always `width * height * 3`, rows are tightly packed in row-major order.
///
/// # Example
///
/// ```
/// use pencil_quantize::{PixelBuffer, Rgb};
///
/// let mut buffer = PixelBuffer::new(2, 2).unwrap();
/// buffer.set_pixel(1, 0, Rgb::new(255, 0, 0));
///
/// assert_eq!(buffer.pixel(1, 0), Rgb::new(255, 0, 0));
/// assert_eq!(buffer.as_bytes().len(), 2 * 2 * 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a zero-initialized (black) buffer.
    ///
    /// # Errors
    ///
    /// - [`BufferError::ZeroDimension`] if either extent is zero
    /// - [`BufferError::TooLarge`] if the byte count overflows or cannot be
    ///   allocated
    pub fn new(width: u32, height: u32) -> Result<Self, BufferError> {
        let len = Self::storage_len(width, height)?;
        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| BufferError::TooLarge { width, height })?;
        data.resize(len, 0);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wrap existing RGB24 samples.
    ///
    /// # Errors
    ///
    /// - [`BufferError::ZeroDimension`] if either extent is zero
    /// - [`BufferError::TooLarge`] if the byte count overflows
    /// - [`BufferError::LengthMismatch`] if `data.len() != width * height * 3`
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, BufferError> {
        let expected = Self::storage_len(width, height)?;
        if data.len() != expected {
            return Err(BufferError::LengthMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a buffer from row-major pixels.
    ///
    /// # Errors
    ///
    /// Same conditions as [`PixelBuffer::from_raw`], with the length
    /// measured in bytes (`pixels.len() * 3`).
    pub fn from_pixels(width: u32, height: u32, pixels: &[Rgb]) -> Result<Self, BufferError> {
        let data = pixels.iter().flat_map(|p| p.to_bytes()).collect();
        Self::from_raw(width, height, data)
    }

    fn storage_len(width: u32, height: u32) -> Result<usize, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::ZeroDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(CHANNELS))
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(BufferError::TooLarge { width, height })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Byte offset of pixel `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`. Callers clamp coordinates
    /// before addressing; an out-of-range access is a bug, not an input error.
    #[inline]
    pub fn offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) outside {}x{} buffer",
            x,
            y,
            self.width,
            self.height
        );
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Read pixel `(x, y)`. Panics when out of range, see [`offset`](Self::offset).
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let i = self.offset(x, y);
        Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2])
    }

    /// Read a pixel with clamp-to-edge addressing.
    ///
    /// Coordinates outside the buffer are pinned to the nearest edge pixel,
    /// never wrapped or zero-filled.
    #[inline]
    pub fn pixel_clamped(&self, x: i64, y: i64) -> Rgb {
        let cx = x.clamp(0, self.width as i64 - 1) as u32;
        let cy = y.clamp(0, self.height as i64 - 1) as u32;
        self.pixel(cx, cy)
    }

    /// Write pixel `(x, y)`. Panics when out of range.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgb) {
        let i = self.offset(x, y);
        self.data[i..i + CHANNELS].copy_from_slice(&color.to_bytes());
    }

    /// Iterate over all pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|p| Rgb::new(p[0], p[1], p[2]))
    }

    /// Overwrite this buffer with an exact copy of `src`.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::DimensionMismatch`] unless both buffers have
    /// identical dimensions. Nothing is written on error.
    pub fn copy_from(&mut self, src: &PixelBuffer) -> Result<(), BufferError> {
        if self.dimensions() != src.dimensions() {
            return Err(BufferError::DimensionMismatch {
                src: src.dimensions(),
                dst: self.dimensions(),
            });
        }
        self.data.copy_from_slice(&src.data);
        Ok(())
    }

    /// Raw RGB24 samples.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer, returning its samples.
    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}
