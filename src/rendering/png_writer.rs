use std::io::Cursor;
use std::path::Path;

use pencil_quantize::SketchImage;

use crate::error::RenderError;

/// Largest output edge in pixels.
const MAX_EDGE: u32 = 16_384;

/// Write the sketch as an RGB8 PNG, each cell a `scale x scale` square.
pub fn write_png(path: &Path, sketch: &SketchImage, scale: u32) -> Result<(), RenderError> {
    let png = encode_png(sketch, scale)?;
    std::fs::write(path, &png)?;
    tracing::info!(
        path = %path.display(),
        width = sketch.width() * scale,
        height = sketch.height() * scale,
        bytes = png.len(),
        "Wrote PNG"
    );
    Ok(())
}

/// Encode the upscaled sketch as PNG bytes.
pub fn encode_png(sketch: &SketchImage, scale: u32) -> Result<Vec<u8>, RenderError> {
    if scale == 0 {
        return Err(RenderError::InvalidScale(scale));
    }
    let too_large = || RenderError::TooLarge {
        width: sketch.width(),
        height: sketch.height(),
        scale,
    };
    let width = sketch.width().checked_mul(scale).ok_or_else(too_large)?;
    let height = sketch.height().checked_mul(scale).ok_or_else(too_large)?;
    if width > MAX_EDGE || height > MAX_EDGE {
        return Err(too_large());
    }

    let pixels = upscale(&sketch.to_rgb(), sketch.width(), scale);

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&pixels)
            .map_err(|e| RenderError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Nearest-neighbor upscale of packed RGB rows by an integer factor.
fn upscale(rgb: &[u8], width: u32, scale: u32) -> Vec<u8> {
    let scale = scale as usize;
    let row_len = width as usize * 3;
    let mut out = Vec::with_capacity(rgb.len() * scale * scale);
    for row in rgb.chunks(row_len.max(1)) {
        let mut wide = Vec::with_capacity(row.len() * scale);
        for px in row.chunks_exact(3) {
            for _ in 0..scale {
                wide.extend_from_slice(px);
            }
        }
        for _ in 0..scale {
            out.extend_from_slice(&wide);
        }
    }
    out
}
