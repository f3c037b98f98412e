use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use pencil_quantize::{PixelBuffer, CHANNELS};

use crate::error::ImageError;

/// Decode a PNG file into a 3-channel [`PixelBuffer`].
///
/// Every PNG color type is accepted. Palette and low bit depth images are
/// expanded and 16-bit samples are stripped to 8 bits; grey is replicated
/// into all three channels and alpha is dropped.
pub fn load_png(path: &Path) -> Result<PixelBuffer, ImageError> {
    let file = File::open(path).map_err(|source| ImageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let buffer = decode_png(BufReader::new(file), path)?;

    tracing::info!(
        path = %path.display(),
        width = buffer.width(),
        height = buffer.height(),
        "Loaded image"
    );
    Ok(buffer)
}

/// Decode PNG data from any reader. `path` only labels errors.
pub fn decode_png<R: Read>(reader: R, path: &Path) -> Result<PixelBuffer, ImageError> {
    let decode_err = |e: png::DecodingError| ImageError::Decode {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut decoder = png::Decoder::new(reader);
    decoder.set_transformations(png::Transformations::normalize_to_color8());
    let mut reader = decoder.read_info().map_err(decode_err)?;

    let mut raw = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut raw).map_err(decode_err)?;
    raw.truncate(info.buffer_size());

    if info.bit_depth != png::BitDepth::Eight {
        return Err(ImageError::UnsupportedLayout {
            path: path.to_path_buf(),
            layout: format!("{:?} at {:?} bits", info.color_type, info.bit_depth),
        });
    }

    tracing::debug!(
        path = %path.display(),
        color_type = ?info.color_type,
        width = info.width,
        height = info.height,
        "Decoded PNG"
    );

    let rgb = to_rgb8(&raw, info.color_type).ok_or_else(|| ImageError::UnsupportedLayout {
        path: path.to_path_buf(),
        layout: format!("{:?}", info.color_type),
    })?;

    PixelBuffer::from_raw(info.width, info.height, rgb).map_err(|e| ImageError::Invalid {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Convert 8-bit samples of a normalized color type into packed RGB.
fn to_rgb8(raw: &[u8], color_type: png::ColorType) -> Option<Vec<u8>> {
    let stride = match color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => return Some(raw.to_vec()),
        png::ColorType::Rgba => 4,
        png::ColorType::Indexed => return None,
    };

    let mut rgb = Vec::with_capacity(raw.len() / stride * CHANNELS);
    for px in raw.chunks_exact(stride) {
        if stride >= 3 {
            rgb.extend_from_slice(&px[..3]);
        } else {
            rgb.extend_from_slice(&[px[0], px[0], px[0]]);
        }
    }
    Some(rgb)
}
