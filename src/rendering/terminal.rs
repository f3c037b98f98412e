use std::fmt::Write;

use pencil_quantize::{Palette, Rgb, SketchImage};

/// Escape sequence restoring the default terminal colors.
pub const RESET: &str = "\x1b[0m";

/// Glyph pair printed for one cell in block mode.
const BLOCK: &str = "\u{2588}\u{2588}";

/// How each grid cell is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RenderMode {
    /// Two full-block glyphs in the chosen color
    #[default]
    Blocks,
    /// Entry index followed by H (heavy) or L (light)
    Indices,
}

/// 24-bit ANSI foreground color sequence.
pub fn fg(color: Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

/// Render the grid in the given mode, one grid row per line.
pub fn render(sketch: &SketchImage, mode: RenderMode) -> String {
    match mode {
        RenderMode::Blocks => render_blocks(sketch),
        RenderMode::Indices => render_indices(sketch),
    }
}

/// Colored block rendering. Every row ends with a color reset.
pub fn render_blocks(sketch: &SketchImage) -> String {
    let palette = sketch.palette();
    let mut out = String::new();
    for row in sketch.rows() {
        for m in row {
            out.push_str(&fg(palette.resolve(m)));
            out.push_str(BLOCK);
        }
        out.push_str(RESET);
        out.push('\n');
    }
    out
}

/// Index rendering, e.g. `0H 3L 3L`, cells space separated.
pub fn render_indices(sketch: &SketchImage) -> String {
    let mut out = String::new();
    for row in sketch.rows() {
        let cells: Vec<String> = row
            .iter()
            .map(|m| format!("{}{}", m.index, m.trace.marker()))
            .collect();
        out.push_str(&cells.join(" "));
        out.push('\n');
    }
    out
}

/// Legend of the entries the sketch actually uses, in palette order.
pub fn render_legend(sketch: &SketchImage) -> String {
    let palette = sketch.palette();
    let mut out = String::new();
    for (index, usage) in sketch.usage().iter().enumerate() {
        if usage.total() == 0 {
            continue;
        }
        let entry = &palette[index];
        let _ = writeln!(
            out,
            "{index:>3} {}{BLOCK}{RESET} {}{BLOCK}{RESET} {:<16} H:{:<4} L:{}",
            fg(entry.heavy()),
            fg(entry.light()),
            entry.name(),
            usage.heavy,
            usage.light,
        );
    }
    out
}

/// Swatch listing of a whole palette.
pub fn render_palette(palette: &Palette) -> String {
    let mut out = String::new();
    for (index, entry) in palette.entries().iter().enumerate() {
        let _ = writeln!(
            out,
            "{index:>3} {}{BLOCK}{RESET} {} {}{BLOCK}{RESET} {} {}",
            fg(entry.heavy()),
            entry.heavy(),
            fg(entry.light()),
            entry.light(),
            entry.name(),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pencil_quantize::{quantize, PixelBuffer};

    fn sketch() -> SketchImage {
        let palette: Palette = "ink 000000 404040\npaper ffffff c0c0c0\n".parse().unwrap();
        let buffer = PixelBuffer::from_pixels(
            2,
            2,
            &[
                Rgb::new(0, 0, 0),
                Rgb::new(255, 255, 255),
                Rgb::new(60, 60, 60),
                Rgb::new(0, 0, 0),
            ],
        )
        .unwrap();
        quantize(&buffer, &palette)
    }

    #[test]
    fn test_fg_sequence() {
        assert_eq!(fg(Rgb::new(1, 22, 255)), "\x1b[38;2;1;22;255m");
    }

    #[test]
    fn test_render_indices() {
        assert_eq!(render_indices(&sketch()), "0H 1H\n0L 0H\n");
    }

    #[test]
    fn test_render_blocks_layout() {
        let out = render(&sketch(), RenderMode::Blocks);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.ends_with(RESET)));
        assert_eq!(
            lines[0],
            format!(
                "\x1b[38;2;0;0;0m{BLOCK}\x1b[38;2;255;255;255m{BLOCK}{RESET}"
            )
        );
        assert_eq!(lines[1].matches(BLOCK).count(), 2);
    }

    #[test]
    fn test_legend_lists_used_entries() {
        let palette: Palette = "ink 000000 404040\npaper ffffff c0c0c0\nred ff0000 ff8080\n"
            .parse()
            .unwrap();
        let buffer = PixelBuffer::from_pixels(1, 2, &[Rgb::new(0, 0, 0); 2]).unwrap();
        let legend = render_legend(&quantize(&buffer, &palette));

        assert_eq!(legend.lines().count(), 1);
        assert!(legend.contains("ink"));
        assert!(legend.contains("H:2"));
        assert!(!legend.contains("red"));
    }

    #[test]
    fn test_render_palette_lists_all() {
        let palette: Palette = "ink 000000 404040\npaper ffffff c0c0c0\n".parse().unwrap();
        let out = render_palette(&palette);
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("#c0c0c0 paper"));
    }
}
