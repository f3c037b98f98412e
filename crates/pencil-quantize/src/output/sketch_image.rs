//! Quantized sketch grid.

use crate::buffer::{BufferError, PixelBuffer};
use crate::palette::{ColorMatch, Palette, Trace};

/// How often one palette entry was chosen, split by trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntryUsage {
    /// Cells that matched the heavy color
    pub heavy: usize,
    /// Cells that matched the light color
    pub light: usize,
}

impl EntryUsage {
    /// Cells that matched either color.
    #[inline]
    pub fn total(&self) -> usize {
        self.heavy + self.light
    }
}

/// Result of matching every cell of a resampled grid against a palette.
///
/// Stores one [`ColorMatch`] per cell in row-major order, with the grid
/// dimensions and an owned copy of the [`Palette`] so that indices can be
/// resolved without the caller keeping the palette around.
#[derive(Debug, Clone)]
pub struct SketchImage {
    matches: Vec<ColorMatch>,
    width: u32,
    height: u32,
    palette: Palette,
}

impl SketchImage {
    /// Wrap precomputed matches.
    ///
    /// # Panics
    ///
    /// Panics if `matches.len() != width * height`.
    pub fn new(matches: Vec<ColorMatch>, width: u32, height: u32, palette: Palette) -> Self {
        assert_eq!(
            matches.len(),
            width as usize * height as usize,
            "match count does not fit a {}x{} grid",
            width,
            height
        );
        Self {
            matches,
            width,
            height,
            palette,
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// All matches, row-major.
    #[inline]
    pub fn matches(&self) -> &[ColorMatch] {
        &self.matches
    }

    /// Match at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<&ColorMatch> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.matches
            .get(y as usize * self.width as usize + x as usize)
    }

    /// Iterate over grid rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[ColorMatch]> + '_ {
        self.matches.chunks(self.width.max(1) as usize)
    }

    /// The palette the matches index into.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Flat `[R, G, B, ...]` bytes of the chosen reference colors.
    ///
    /// The returned buffer has length `width * height * 3`.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.matches.len() * 3);
        for m in &self.matches {
            rgb.extend_from_slice(&self.palette.resolve(m).to_bytes());
        }
        rgb
    }

    /// Chosen reference colors as a [`PixelBuffer`] of the grid's size.
    ///
    /// # Errors
    ///
    /// [`BufferError::ZeroDimension`] for an empty grid.
    pub fn to_buffer(&self) -> Result<PixelBuffer, BufferError> {
        PixelBuffer::from_raw(self.width, self.height, self.to_rgb())
    }

    /// Per-entry usage counts, in palette order.
    ///
    /// Entries that were never chosen are present with zero counts.
    pub fn usage(&self) -> Vec<EntryUsage> {
        let mut usage = vec![EntryUsage::default(); self.palette.len()];
        for m in &self.matches {
            let slot = &mut usage[m.index];
            match m.trace {
                Trace::Heavy => slot.heavy += 1,
                Trace::Light => slot.light += 1,
            }
        }
        usage
    }
}

/// Match every pixel of `buffer` against `palette`, row-major.
///
/// Each cell is an independent [`Palette::find_closest`] call.
pub fn quantize(buffer: &PixelBuffer, palette: &Palette) -> SketchImage {
    let matches = buffer.pixels().map(|p| palette.find_closest(p)).collect();
    SketchImage::new(matches, buffer.width(), buffer.height(), palette.clone())
}
