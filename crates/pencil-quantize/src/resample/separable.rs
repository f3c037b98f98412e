//! Two-pass separable resampling.

use super::{sample, Direction, KernelType, ResampleError};
use crate::buffer::PixelBuffer;

/// Source step per destination pixel along one axis.
///
/// Anchors both end pixels: destination index `dst - 1` maps exactly onto
/// source index `src - 1`. A destination extent of 1 (or 0) returns 1.0
/// instead of dividing by zero.
///
/// # Example
///
/// ```
/// use pencil_quantize::axis_ratio;
///
/// assert_eq!(axis_ratio(5, 3), 2.0);
/// assert_eq!(axis_ratio(640, 1), 1.0);
/// ```
#[inline]
pub fn axis_ratio(src_extent: u32, dst_extent: u32) -> f32 {
    if dst_extent <= 1 {
        1.0
    } else {
        (src_extent as f32 - 1.0) / (dst_extent - 1) as f32
    }
}

/// Resample `src` into `dst`, whose dimensions select the output size.
///
/// When both buffers have the same dimensions `dst` becomes a byte-exact
/// copy of `src` and the kernel is never invoked, whichever kernel is
/// requested.
///
/// Otherwise the horizontal pass fills a `dst_width x src_height`
/// intermediate buffer from `src`, and the vertical pass fills `dst` from
/// the intermediate. The intermediate buffer lives only for this call.
///
/// # Errors
///
/// [`ResampleError::PassFailed`] if the kernel fails in either pass; the
/// error names the pass. The contents of `dst` are unspecified after a
/// failure. Use [`ResampleError::is_not_implemented`] to detect the
/// "choose another kernel" case.
pub fn resample(
    src: &PixelBuffer,
    dst: &mut PixelBuffer,
    kernel: KernelType,
) -> Result<(), ResampleError> {
    if src.dimensions() == dst.dimensions() {
        dst.copy_from(src)?;
        return Ok(());
    }

    let (src_width, src_height) = src.dimensions();
    let (dst_width, dst_height) = dst.dimensions();

    let h_ratio = axis_ratio(src_width, dst_width);
    let v_ratio = axis_ratio(src_height, dst_height);

    tracing::trace!(
        src_width,
        src_height,
        dst_width,
        dst_height,
        h_ratio,
        v_ratio,
        %kernel,
        "Resampling"
    );

    let mut intermediate = PixelBuffer::new(dst_width, src_height)?;

    for j in 0..src_height {
        for i in 0..dst_width {
            let fx = i as f32 * h_ratio;
            let fy = j as f32;
            let color = sample(src, Direction::Horizontal, fx, fy, kernel).map_err(|source| {
                ResampleError::PassFailed {
                    pass: Direction::Horizontal,
                    source,
                }
            })?;
            intermediate.set_pixel(i, j, color);
        }
    }

    for j in 0..dst_height {
        for i in 0..dst_width {
            let fx = i as f32;
            let fy = j as f32 * v_ratio;
            let color =
                sample(&intermediate, Direction::Vertical, fx, fy, kernel).map_err(|source| {
                    ResampleError::PassFailed {
                        pass: Direction::Vertical,
                        source,
                    }
                })?;
            dst.set_pixel(i, j, color);
        }
    }

    Ok(())
}

/// Resample `src` into a newly allocated `width x height` buffer.
///
/// # Errors
///
/// - [`ResampleError::InvalidParameters`] if `width` or `height` is zero
///   (checked before any allocation)
/// - [`ResampleError::Buffer`] if a buffer of the requested size cannot be
///   allocated
/// - any error of [`resample()`]
pub fn resize(
    src: &PixelBuffer,
    width: u32,
    height: u32,
    kernel: KernelType,
) -> Result<PixelBuffer, ResampleError> {
    if width == 0 || height == 0 {
        return Err(ResampleError::InvalidParameters(format!(
            "destination dimensions must be positive, got {}x{}",
            width, height
        )));
    }
    let mut dst = PixelBuffer::new(width, height)?;
    resample(src, &mut dst, kernel)?;
    Ok(dst)
}
