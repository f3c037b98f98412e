//! Color distance metrics for palette matching.

use std::fmt;
use std::str::FromStr;

use super::Rgb;

/// Distance metric used to rank palette candidates.
///
/// Every metric is symmetric, non-negative and zero for identical colors.
/// Distances operate directly on the 8-bit channel values; they are only
/// comparable against other distances computed with the same metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMetric {
    /// Low-cost perceptual approximation ("redmean").
    ///
    /// Red and blue differences are weighted by the mean red level of the
    /// two colors, green is weighted 4x:
    ///
    /// ```text
    /// rmean = (r1 + r2) / 2
    /// d = sqrt((((512 + rmean) * dr²) >> 8) + 4 * dg² + (((767 - rmean) * db²) >> 8))
    /// ```
    ///
    /// Integer arithmetic up to the square root, so results are
    /// reproducible across platforms.
    #[default]
    Redmean,

    /// Plain Euclidean distance over the three channels.
    Euclidean,
}

impl DistanceMetric {
    /// Every metric, default first.
    pub const ALL: [DistanceMetric; 2] = [DistanceMetric::Redmean, DistanceMetric::Euclidean];

    /// Distance between two colors.
    ///
    /// # Example
    ///
    /// ```
    /// use pencil_quantize::{DistanceMetric, Rgb};
    ///
    /// let d = DistanceMetric::Euclidean.distance(Rgb::new(0, 0, 0), Rgb::new(3, 4, 0));
    /// assert_eq!(d, 5.0);
    /// ```
    #[inline]
    pub fn distance(self, a: Rgb, b: Rgb) -> f32 {
        let dr = a.r as i32 - b.r as i32;
        let dg = a.g as i32 - b.g as i32;
        let db = a.b as i32 - b.b as i32;

        match self {
            DistanceMetric::Redmean => {
                let rmean = (a.r as i32 + b.r as i32) / 2;
                let sum = (((512 + rmean) * dr * dr) >> 8)
                    + 4 * dg * dg
                    + (((767 - rmean) * db * db) >> 8);
                (sum as f32).sqrt()
            }
            DistanceMetric::Euclidean => ((dr * dr + dg * dg + db * db) as f32).sqrt(),
        }
    }

    /// Canonical lowercase name, as accepted by [`DistanceMetric::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            DistanceMetric::Redmean => "redmean",
            DistanceMetric::Euclidean => "euclidean",
        }
    }

    /// Look up a metric by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "redmean" => Some(DistanceMetric::Redmean),
            "euclidean" => Some(DistanceMetric::Euclidean),
            _ => None,
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DistanceMetric {
    type Err = ParseMetricError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DistanceMetric::from_name(s).ok_or_else(|| ParseMetricError {
            name: s.to_string(),
        })
    }
}

/// A metric name did not match any [`DistanceMetric`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMetricError {
    /// The unrecognized name
    pub name: String,
}

impl fmt::Display for ParseMetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown distance metric: {} (expected redmean or euclidean)",
            self.name
        )
    }
}

impl std::error::Error for ParseMetricError {}
