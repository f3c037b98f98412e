//! Palette types and nearest-color matching
//!
//! A [`Palette`] is an ordered list of named [`PaletteEntry`] values, each
//! holding a heavy and a light reference color. [`Palette::find_closest`]
//! returns a [`ColorMatch`] naming the winning entry and [`Trace`].

mod entry;
mod error;
mod palette;

pub use entry::{PaletteEntry, Trace};
pub use error::{PaletteError, ParseColorError};
pub use palette::{ColorMatch, Palette};
