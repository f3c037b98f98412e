//! Sketcher builder -- the primary entry point for the crate.
//!
//! [`Sketcher`] runs the whole pipeline: resample the source onto a small
//! grid, then match every grid cell against the palette.

use super::SketchError;
use crate::buffer::PixelBuffer;
use crate::color::DistanceMetric;
use crate::output::{quantize, SketchImage};
use crate::palette::Palette;
use crate::resample::{resize, KernelType};

/// Default grid width in cells.
pub const DEFAULT_GRID_WIDTH: u32 = 32;
/// Default grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u32 = 32;

/// High-level builder that turns an image into a [`SketchImage`].
///
/// - Constructor requires a [`Palette`], so there is no unconfigured state
/// - Configuration methods consume and return `self`
/// - [`sketch()`](Self::sketch) takes `&self`, so one sketcher can process
///   many images
///
/// # Example
///
/// ```
/// use pencil_quantize::{KernelType, Palette, PixelBuffer, Rgb, Sketcher};
///
/// let palette: Palette = "\
/// graphite 000000 555555
/// paper    ffffff cccccc
/// ".parse().unwrap();
///
/// let sketcher = Sketcher::new(palette).grid(2, 2).kernel(KernelType::Bilinear);
///
/// let src = PixelBuffer::from_pixels(4, 4, &[Rgb::new(250, 250, 250); 16]).unwrap();
/// let sketch = sketcher.sketch(&src).unwrap();
///
/// assert_eq!(sketch.width(), 2);
/// assert!(sketch.matches().iter().all(|m| m.index == 1));
/// ```
#[derive(Debug, Clone)]
pub struct Sketcher {
    palette: Palette,
    width: u32,
    height: u32,
    kernel: KernelType,
}

impl Sketcher {
    /// Create a sketcher for `palette`.
    ///
    /// Defaults: a 32x32 grid and the bilinear kernel. The palette keeps
    /// its own distance metric unless [`distance_metric`](Self::distance_metric)
    /// is called.
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            width: DEFAULT_GRID_WIDTH,
            height: DEFAULT_GRID_HEIGHT,
            kernel: KernelType::default(),
        }
    }

    /// Set the output grid size in cells.
    ///
    /// Zero extents are accepted here and rejected by [`sketch()`](Self::sketch).
    #[inline]
    pub fn grid(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the resampling kernel.
    #[inline]
    pub fn kernel(mut self, kernel: KernelType) -> Self {
        self.kernel = kernel;
        self
    }

    /// Set the color distance used for matching.
    #[inline]
    pub fn distance_metric(mut self, metric: DistanceMetric) -> Self {
        self.palette = self.palette.with_distance_metric(metric);
        self
    }

    /// The palette used for matching.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Configured grid size as `(width, height)`.
    #[inline]
    pub fn grid_size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Configured resampling kernel.
    #[inline]
    pub fn kernel_type(&self) -> KernelType {
        self.kernel
    }

    /// Resample `src` onto the grid and match every cell.
    ///
    /// # Errors
    ///
    /// [`SketchError::Resample`] if the grid has a zero extent, is too large
    /// to allocate, or the kernel fails. Nothing is matched in that case.
    pub fn sketch(&self, src: &PixelBuffer) -> Result<SketchImage, SketchError> {
        let grid = resize(src, self.width, self.height, self.kernel)?;
        Ok(quantize(&grid, &self.palette))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::BufferError;
    use crate::color::Rgb;
    use crate::palette::Trace;
    use crate::resample::ResampleError;

    fn palette() -> Palette {
        "\
graphite 000000 555555
paper    ffffff cccccc
"
        .parse()
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let sketcher = Sketcher::new(palette());
        assert_eq!(sketcher.grid_size(), (32, 32));
        assert_eq!(sketcher.kernel_type(), KernelType::Bilinear);
        assert_eq!(sketcher.palette().distance_metric(), DistanceMetric::Redmean);
    }

    #[test]
    fn test_default_grid_from_large_source() {
        let src = PixelBuffer::new(100, 60).unwrap();
        let sketch = Sketcher::new(palette()).sketch(&src).unwrap();
        assert_eq!((sketch.width(), sketch.height()), (32, 32));
        assert!(sketch
            .matches()
            .iter()
            .all(|m| m.index == 0 && m.trace == Trace::Heavy));
    }

    #[test]
    fn test_builder_is_reusable() {
        let sketcher = Sketcher::new(palette()).grid(3, 1);
        let dark = PixelBuffer::from_pixels(2, 1, &[Rgb::new(80, 80, 80); 2]).unwrap();
        let light = PixelBuffer::from_pixels(2, 1, &[Rgb::new(210, 210, 210); 2]).unwrap();

        let a = sketcher.sketch(&dark).unwrap();
        let b = sketcher.sketch(&light).unwrap();
        assert!(a.matches().iter().all(|m| m.index == 0 && m.trace == Trace::Light));
        assert!(b.matches().iter().all(|m| m.index == 1 && m.trace == Trace::Light));
    }

    #[test]
    fn test_distance_metric_override() {
        let sketcher = Sketcher::new(palette()).distance_metric(DistanceMetric::Euclidean);
        assert_eq!(sketcher.palette().distance_metric(), DistanceMetric::Euclidean);
    }

    #[test]
    fn test_zero_grid_rejected() {
        let src = PixelBuffer::new(4, 4).unwrap();
        let err = Sketcher::new(palette()).grid(0, 4).sketch(&src).unwrap_err();
        assert!(matches!(
            err,
            SketchError::Resample(ResampleError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_huge_grid_is_error_not_panic() {
        let src = PixelBuffer::new(4, 4).unwrap();
        let err = Sketcher::new(palette())
            .grid(u32::MAX, u32::MAX)
            .sketch(&src)
            .unwrap_err();
        assert!(matches!(
            err,
            SketchError::Resample(ResampleError::Buffer(BufferError::TooLarge { .. }))
        ));
    }

    #[test]
    fn test_unimplemented_kernel_surfaces() {
        let src = PixelBuffer::new(4, 4).unwrap();
        let err = Sketcher::new(palette())
            .grid(2, 2)
            .kernel(KernelType::Gaussian)
            .sketch(&src)
            .unwrap_err();
        assert!(err.is_not_implemented());
    }

    #[test]
    fn test_identity_grid_skips_kernel() {
        // same size as the source: copied, so even an unimplemented kernel succeeds
        let src = PixelBuffer::new(2, 2).unwrap();
        let sketch = Sketcher::new(palette())
            .grid(2, 2)
            .kernel(KernelType::Lanczos3)
            .sketch(&src)
            .unwrap();
        assert_eq!(sketch.matches().len(), 4);
    }
}
