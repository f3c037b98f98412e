//! Named two-tone palette entries.

use std::fmt;

use super::error::PaletteError;
use crate::color::Rgb;

/// Which of an entry's two reference colors was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trace {
    /// The dense stroke color
    Heavy,
    /// The light stroke color
    Light,
}

impl Trace {
    /// Single-letter marker used in indexed output (`H` / `L`).
    pub fn marker(self) -> char {
        match self {
            Trace::Heavy => 'H',
            Trace::Light => 'L',
        }
    }
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trace::Heavy => f.write_str("heavy"),
            Trace::Light => f.write_str("light"),
        }
    }
}

/// A named material with a heavy and a light reference color.
///
/// Both colors are always present and the entry cannot be modified after
/// construction.
///
/// # Example
///
/// ```
/// use pencil_quantize::{PaletteEntry, Rgb, Trace};
///
/// let entry = PaletteEntry::new("crimson", Rgb::new(160, 20, 40), Rgb::new(230, 150, 160)).unwrap();
/// assert_eq!(entry.color(Trace::Light), Rgb::new(230, 150, 160));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    name: String,
    heavy: Rgb,
    light: Rgb,
}

impl PaletteEntry {
    /// Create an entry.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::EmptyName`] if `name` is empty or whitespace.
    pub fn new(name: impl Into<String>, heavy: Rgb, light: Rgb) -> Result<Self, PaletteError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(PaletteError::EmptyName);
        }
        Ok(Self { name, heavy, light })
    }

    /// Entry label.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Heavy reference color.
    #[inline]
    pub fn heavy(&self) -> Rgb {
        self.heavy
    }

    /// Light reference color.
    #[inline]
    pub fn light(&self) -> Rgb {
        self.light
    }

    /// Reference color for the given trace.
    #[inline]
    pub fn color(&self, trace: Trace) -> Rgb {
        match trace {
            Trace::Heavy => self.heavy,
            Trace::Light => self.light,
        }
    }
}
