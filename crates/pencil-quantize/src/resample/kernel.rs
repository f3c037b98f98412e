//! Per-sample kernel dispatch.

use super::{Direction, KernelError, KernelType};
use crate::buffer::PixelBuffer;
use crate::color::Rgb;

/// Interpolate one pixel of `src` at the floating-point coordinate `(x, y)`.
///
/// Only the axis named by `direction` is interpolated; the other coordinate
/// is rounded to the nearest row or column. Pixel indices derived from the
/// coordinates are clamped into the buffer (clamp-to-edge), the coordinates
/// themselves are not: a negative or non-finite coordinate is an error.
///
/// # Errors
///
/// - [`KernelError::NotImplemented`] for every kernel except
///   [`KernelType::Bilinear`] (also logged as a warning)
/// - [`KernelError::InvalidCoordinate`] if `x` or `y` is negative or not finite
///
/// # Example
///
/// ```
/// use pencil_quantize::{sample, Direction, KernelType, PixelBuffer, Rgb};
///
/// let src = PixelBuffer::from_pixels(2, 1, &[Rgb::new(0, 0, 0), Rgb::new(200, 100, 50)]).unwrap();
/// let mid = sample(&src, Direction::Horizontal, 0.5, 0.0, KernelType::Bilinear).unwrap();
/// assert_eq!(mid, Rgb::new(100, 50, 25));
/// ```
pub fn sample(
    src: &PixelBuffer,
    direction: Direction,
    x: f32,
    y: f32,
    kernel: KernelType,
) -> Result<Rgb, KernelError> {
    match kernel {
        KernelType::Bilinear => {
            check_coordinates(x, y)?;
            Ok(sample_bilinear(src, direction, x, y))
        }
        KernelType::Nearest
        | KernelType::Average
        | KernelType::Bicubic
        | KernelType::Mitchell
        | KernelType::Cardinal
        | KernelType::BSpline
        | KernelType::Lanczos
        | KernelType::Lanczos2
        | KernelType::Lanczos3
        | KernelType::Lanczos4
        | KernelType::Lanczos5
        | KernelType::CatmullRom
        | KernelType::Gaussian => {
            tracing::warn!(%kernel, "Kernel type not implemented");
            Err(KernelError::NotImplemented(kernel))
        }
    }
}

#[inline]
fn check_coordinates(x: f32, y: f32) -> Result<(), KernelError> {
    // Written so that NaN fails too.
    if !(x >= 0.0 && y >= 0.0) || !x.is_finite() || !y.is_finite() {
        return Err(KernelError::InvalidCoordinate { x, y });
    }
    Ok(())
}

/// Two-tap linear interpolation along one axis.
///
/// The coordinate is not biased by 0.5: `floor(coord)` and the next index
/// are the two taps, and the fractional part is the weight of the second.
#[inline]
fn sample_bilinear(src: &PixelBuffer, direction: Direction, x: f32, y: f32) -> Rgb {
    let (p0, p1, weight) = match direction {
        Direction::Horizontal => {
            let base = x.floor();
            let row = y.round() as i64;
            let col = base as i64;
            (
                src.pixel_clamped(col, row),
                src.pixel_clamped(col + 1, row),
                x - base,
            )
        }
        Direction::Vertical => {
            let base = y.floor();
            let col = x.round() as i64;
            let row = base as i64;
            (
                src.pixel_clamped(col, row),
                src.pixel_clamped(col, row + 1),
                y - base,
            )
        }
    };

    Rgb::new(
        lerp_channel(p0.r, p1.r, weight),
        lerp_channel(p0.g, p1.g, weight),
        lerp_channel(p0.b, p1.b, weight),
    )
}

#[inline]
fn lerp_channel(a: u8, b: u8, weight: f32) -> u8 {
    (a as f32 * (1.0 - weight) + b as f32 * weight)
        .round()
        .clamp(0.0, 255.0) as u8
}
