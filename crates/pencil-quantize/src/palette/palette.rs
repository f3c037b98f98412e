//! Palette of two-tone entries with exhaustive nearest-color matching.

use std::str::FromStr;

use super::entry::{PaletteEntry, Trace};
use super::error::PaletteError;
use crate::color::{DistanceMetric, Rgb};

/// Outcome of [`Palette::find_closest`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatch {
    /// 0-based index of the winning entry, in palette order
    pub index: usize,
    /// Which of the entry's two colors won
    pub trace: Trace,
    /// Distance between the query and the winning color
    pub distance: f32,
}

impl ColorMatch {
    /// True if the heavy color won.
    #[inline]
    pub fn is_heavy(&self) -> bool {
        self.trace == Trace::Heavy
    }
}

/// An ordered, non-empty set of [`PaletteEntry`] values.
///
/// Every entry contributes two candidates (heavy and light) to matching.
/// Order only matters for the indices reported in [`ColorMatch`] and for
/// breaking exact ties; it does not change which distance is minimal.
///
/// The palette is read-only once built, so a shared reference can serve
/// concurrent [`find_closest`](Palette::find_closest) calls.
///
/// # Example
///
/// ```
/// use pencil_quantize::{Palette, Rgb};
///
/// let palette: Palette = "\
/// graphite 000000 0a0a0a
/// chalk    ffffff f5f5f5
/// ".parse().unwrap();
///
/// let m = palette.find_closest(Rgb::new(5, 5, 5));
/// assert_eq!(m.index, 0);
/// assert_eq!(palette[m.index].name(), "graphite");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    distance_metric: DistanceMetric,
}

impl Palette {
    /// Create a palette using the default [`DistanceMetric::Redmean`].
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyPalette`] if `entries` is empty. An empty
    /// palette has no closest color, so it is rejected here rather than at
    /// match time.
    pub fn new(entries: Vec<PaletteEntry>) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        Ok(Self {
            entries,
            distance_metric: DistanceMetric::default(),
        })
    }

    /// Parse the line-oriented palette definition format.
    ///
    /// Each line holds three whitespace-separated fields: a name token and
    /// two hex color tokens (heavy, then light). Color tokens follow
    /// [`Rgb`]'s `FromStr`. Blank lines are skipped. A line starting with
    /// `#` is a comment unless it reads as a complete entry: a name token
    /// longer than `#` followed by two valid colors. So `#2 ff0000 800000`
    /// defines an entry named `#2`, while `# name heavy light` is a comment.
    ///
    /// ```text
    /// # name     heavy    light
    /// carmine    9a1b2c   e3a1ad
    /// ultramarine 0x1f2a8c #9aa6e8
    /// ```
    ///
    /// # Errors
    ///
    /// - [`PaletteError::Syntax`] if a line does not have exactly three fields
    /// - [`PaletteError::ParseColor`] if a color token is malformed
    /// - [`PaletteError::EmptyPalette`] if no entries were found
    ///
    /// Line-level errors report the 1-based line number.
    pub fn parse(text: &str) -> Result<Self, PaletteError> {
        let mut entries = Vec::new();

        for (i, raw) in text.lines().enumerate() {
            let line = i + 1;
            let content = raw.trim();
            if content.is_empty() {
                continue;
            }

            let fields: Vec<&str> = content.split_whitespace().collect();
            if content.starts_with('#') && !is_entry_line(&fields) {
                continue;
            }
            let [name, heavy, light] = fields.as_slice() else {
                return Err(PaletteError::Syntax {
                    line,
                    message: format!(
                        "expected `name heavy light`, found {} field(s)",
                        fields.len()
                    ),
                });
            };

            let parse_color = |token: &str| {
                token
                    .parse::<Rgb>()
                    .map_err(|source| PaletteError::ParseColor { line, source })
            };
            let heavy = parse_color(*heavy)?;
            let light = parse_color(*light)?;

            entries.push(PaletteEntry::new(*name, heavy, light)?);
        }

        Palette::new(entries)
    }

    /// Replace the distance metric used for matching.
    pub fn with_distance_metric(mut self, metric: DistanceMetric) -> Self {
        self.distance_metric = metric;
        self
    }

    /// The distance metric used for matching.
    #[inline]
    pub fn distance_metric(&self) -> DistanceMetric {
        self.distance_metric
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false`; empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in palette order.
    #[inline]
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Entry at `index`, if any.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&PaletteEntry> {
        self.entries.get(index)
    }

    /// Find the closest reference color to `color` across the whole palette.
    ///
    /// Scans every entry in order, comparing the heavy color before the
    /// light one. A candidate replaces the running best only if it is
    /// strictly closer, so on an exact tie the first candidate in scan
    /// order wins. That order is part of the contract: any reordering of the
    /// scan (for example a parallel reduction) must keep it.
    #[inline]
    pub fn find_closest(&self, color: Rgb) -> ColorMatch {
        let mut best = ColorMatch {
            index: 0,
            trace: Trace::Heavy,
            distance: f32::INFINITY,
        };

        for (index, entry) in self.entries.iter().enumerate() {
            for trace in [Trace::Heavy, Trace::Light] {
                let distance = self.distance_metric.distance(color, entry.color(trace));
                if distance < best.distance {
                    best = ColorMatch {
                        index,
                        trace,
                        distance,
                    };
                }
            }
        }

        best
    }

    /// Reference color selected by a match.
    ///
    /// # Panics
    ///
    /// Panics if `m.index` is out of range, i.e. `m` came from another palette.
    #[inline]
    pub fn resolve(&self, m: &ColorMatch) -> Rgb {
        self.entries[m.index].color(m.trace)
    }
}

impl std::ops::Index<usize> for Palette {
    type Output = PaletteEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl FromStr for Palette {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Palette::parse(s)
    }
}

/// A `#`-prefixed line that still holds a name and two parseable colors.
fn is_entry_line(fields: &[&str]) -> bool {
    match fields {
        [name, heavy, light] => {
            *name != "#" && heavy.parse::<Rgb>().is_ok() && light.parse::<Rgb>().is_ok()
        }
        _ => false,
    }
}
