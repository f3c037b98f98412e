use std::path::Path;

use pencil_quantize::Palette;

use crate::error::PaletteFileError;

/// Read and parse a palette definition file.
///
/// Each non-blank line is `name heavy light` with hex colors; lines starting
/// with `#` are comments. Errors name the file and, for syntax problems, the
/// line.
pub fn load_palette(path: &Path) -> Result<Palette, PaletteFileError> {
    let text = std::fs::read_to_string(path).map_err(|source| PaletteFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let palette = Palette::parse(&text).map_err(|source| PaletteFileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    for (index, entry) in palette.entries().iter().enumerate() {
        tracing::debug!(
            index,
            name = entry.name(),
            heavy = %entry.heavy(),
            light = %entry.light(),
            "Palette entry"
        );
    }
    tracing::info!(
        path = %path.display(),
        entries = palette.len(),
        "Loaded palette"
    );

    Ok(palette)
}
