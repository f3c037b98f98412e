//! Assertion helpers for tests.

use std::path::Path;

use pencil_quantize::{PixelBuffer, Rgb, SketchImage};
use pretty_assertions::assert_eq;

/// Assert a buffer holds exactly `expected`, row-major
pub fn assert_pixels(buffer: &PixelBuffer, expected: &[Rgb]) {
    let actual: Vec<Rgb> = buffer.pixels().collect();
    assert_eq!(actual, expected.to_vec());
}

/// Assert the sketch's entry indices, row by row
pub fn assert_indices(sketch: &SketchImage, expected: &[&[usize]]) {
    let actual: Vec<Vec<usize>> = sketch
        .rows()
        .map(|row| row.iter().map(|m| m.index).collect())
        .collect();
    let expected: Vec<Vec<usize>> = expected.iter().map(|row| row.to_vec()).collect();
    assert_eq!(actual, expected);
}

/// Decode a PNG file and return `(width, height, rgb bytes)`
pub fn read_rgb_png(path: &Path) -> (u32, u32, Vec<u8>) {
    let file = std::fs::File::open(path).expect("Failed to open PNG");
    let decoder = png::Decoder::new(std::io::BufReader::new(file));
    let mut reader = decoder.read_info().expect("Failed to read PNG header");
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("Failed to decode PNG");
    assert_eq!(info.color_type, png::ColorType::Rgb, "Expected an RGB PNG");
    buf.truncate(info.buffer_size());
    (info.width, info.height, buf)
}
