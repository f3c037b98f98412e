//! Separable image resampling.
//!
//! Resizing is decomposed into two 1D passes: a horizontal pass from the
//! source into an intermediate `dst_width x src_height` buffer, then a
//! vertical pass from the intermediate into the destination. Each output
//! sample comes from a single call to [`sample()`] with the pass's
//! [`Direction`].
//!
//! # Coordinate Mapping
//!
//! Destination index `i` maps to source coordinate `i * ratio` with
//! `ratio = (src - 1) / (dst - 1)`, so the first and last pixels of both
//! images line up exactly (no half-pixel offset). A destination extent of 1
//! uses a ratio of 1.0. See [`axis_ratio()`].
//!
//! # Kernels
//!
//! [`KernelType`] names every kernel a production resampler offers, but only
//! [`KernelType::Bilinear`] samples. Every other kernel fails with
//! [`KernelError::NotImplemented`] instead of falling back to bilinear, so a
//! caller can pick another kernel explicitly.
//!
//! Two-pass filtering is exact only for separable kernels; no true 2D
//! kernel path exists.
//!
//! # Example
//!
//! ```
//! use pencil_quantize::{resize, KernelType, PixelBuffer};
//!
//! let src = PixelBuffer::new(64, 48).unwrap();
//! let small = resize(&src, 16, 12, KernelType::Bilinear).unwrap();
//! assert_eq!(small.dimensions(), (16, 12));
//! ```

mod error;
mod kernel;
mod separable;

use std::fmt;
use std::str::FromStr;

pub use error::{KernelError, ResampleError};
pub use kernel::sample;
pub use separable::{axis_ratio, resample, resize};

/// Axis a 1D interpolation pass runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Interpolate between horizontally adjacent pixels (along x).
    Horizontal,
    /// Interpolate between vertically adjacent pixels (along y).
    Vertical,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Horizontal => f.write_str("horizontal"),
            Direction::Vertical => f.write_str("vertical"),
        }
    }
}

/// Interpolation kernel identifier.
///
/// The set is closed and every dispatch over it is an exhaustive `match`,
/// so implementing a new kernel is a local change in the sampling module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KernelType {
    /// Nearest neighbor
    Nearest,
    /// Box average
    Average,
    /// Linear interpolation between the two nearest samples
    #[default]
    Bilinear,
    /// Cubic convolution
    Bicubic,
    /// Mitchell-Netravali cubic (B = C = 1/3)
    Mitchell,
    /// Cardinal cubic spline
    Cardinal,
    /// Cubic B-spline
    BSpline,
    /// Lanczos, single lobe
    Lanczos,
    /// Lanczos, 2 lobes
    Lanczos2,
    /// Lanczos, 3 lobes
    Lanczos3,
    /// Lanczos, 4 lobes
    Lanczos4,
    /// Lanczos, 5 lobes
    Lanczos5,
    /// Catmull-Rom spline
    CatmullRom,
    /// Gaussian
    Gaussian,
}

impl KernelType {
    /// Every kernel identifier, in declaration order.
    pub const ALL: [KernelType; 14] = [
        KernelType::Nearest,
        KernelType::Average,
        KernelType::Bilinear,
        KernelType::Bicubic,
        KernelType::Mitchell,
        KernelType::Cardinal,
        KernelType::BSpline,
        KernelType::Lanczos,
        KernelType::Lanczos2,
        KernelType::Lanczos3,
        KernelType::Lanczos4,
        KernelType::Lanczos5,
        KernelType::CatmullRom,
        KernelType::Gaussian,
    ];

    /// Canonical name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            KernelType::Nearest => "nearest",
            KernelType::Average => "average",
            KernelType::Bilinear => "bilinear",
            KernelType::Bicubic => "bicubic",
            KernelType::Mitchell => "mitchell",
            KernelType::Cardinal => "cardinal",
            KernelType::BSpline => "b-spline",
            KernelType::Lanczos => "lanczos",
            KernelType::Lanczos2 => "lanczos2",
            KernelType::Lanczos3 => "lanczos3",
            KernelType::Lanczos4 => "lanczos4",
            KernelType::Lanczos5 => "lanczos5",
            KernelType::CatmullRom => "catmull-rom",
            KernelType::Gaussian => "gaussian",
        }
    }

    /// Whether [`sample()`] can execute this kernel.
    pub fn is_implemented(self) -> bool {
        match self {
            KernelType::Bilinear => true,
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
            | KernelType::Gaussian => false,
        }
    }
}

impl fmt::Display for KernelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KernelType {
    type Err = ResampleError;

    /// Parse a kernel name. Case, `-` and `_` are ignored, so `"Lanczos3"`,
    /// `"catmull_rom"` and `"B-Spline"` are all accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let kernel = match key.as_str() {
            "nearest" => KernelType::Nearest,
            "average" | "box" => KernelType::Average,
            "bilinear" | "linear" => KernelType::Bilinear,
            "bicubic" => KernelType::Bicubic,
            "mitchell" => KernelType::Mitchell,
            "cardinal" => KernelType::Cardinal,
            "bspline" => KernelType::BSpline,
            "lanczos" => KernelType::Lanczos,
            "lanczos2" => KernelType::Lanczos2,
            "lanczos3" => KernelType::Lanczos3,
            "lanczos4" => KernelType::Lanczos4,
            "lanczos5" => KernelType::Lanczos5,
            "catmullrom" | "catmull" => KernelType::CatmullRom,
            "gaussian" => KernelType::Gaussian,
            _ => return Err(ResampleError::UnknownKernel(s.to_string())),
        };
        Ok(kernel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_bilinear_is_implemented() {
        let implemented: Vec<KernelType> = KernelType::ALL
            .into_iter()
            .filter(|k| k.is_implemented())
            .collect();
        assert_eq!(implemented, vec![KernelType::Bilinear]);
    }

    #[test]
    fn test_names_roundtrip() {
        for kernel in KernelType::ALL {
            assert_eq!(kernel.name().parse::<KernelType>().unwrap(), kernel);
        }
    }

    #[test]
    fn test_parse_is_lenient_on_case_and_separators() {
        assert_eq!("Lanczos3".parse::<KernelType>().unwrap(), KernelType::Lanczos3);
        assert_eq!(
            "CATMULL_ROM".parse::<KernelType>().unwrap(),
            KernelType::CatmullRom
        );
        assert_eq!("bspline".parse::<KernelType>().unwrap(), KernelType::BSpline);
    }

    #[test]
    fn test_unknown_kernel_name() {
        let err = "sinc".parse::<KernelType>().unwrap_err();
        assert!(matches!(err, ResampleError::UnknownKernel(ref name) if name == "sinc"));
        assert!(!err.is_not_implemented());
    }

    #[test]
    fn test_default_is_bilinear() {
        assert_eq!(KernelType::default(), KernelType::Bilinear);
    }
}
