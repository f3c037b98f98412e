//! Test fixtures and constants.

use pencil_quantize::Rgb;

/// Palette files used across tests
pub mod palettes {
    /// Primaries plus a mid grey, one color per entry
    pub const PRIMARIES: &str = "\
# primaries
black #000000 #000000
white #ffffff #ffffff
red   #ff0000 #ff0000
green #00ff00 #00ff00
grey  #808080 #808080
";

    /// Two entries whose heavy and light colors differ
    pub const MONO: &str = "\
ink   000000 404040
paper ffffff c0c0c0
";

    /// Second line has a bad hex token
    pub const BAD_HEX: &str = "\
ink   000000 404040
paper ffffff c0c0cz
";

    /// Second line is missing its light color
    pub const MISSING_FIELD: &str = "\
ink   000000 404040
paper ffffff
";
}

/// The 2x2 source used by the golden-output tests, row-major
pub const GOLDEN_2X2: [Rgb; 4] = [
    Rgb::new(0, 0, 0),
    Rgb::new(255, 255, 255),
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
];

/// Expected 3x3 bilinear resample of [`GOLDEN_2X2`], row-major
pub const GOLDEN_3X3: [Rgb; 9] = [
    Rgb::new(0, 0, 0),
    Rgb::new(128, 128, 128),
    Rgb::new(255, 255, 255),
    Rgb::new(128, 0, 0),
    Rgb::new(128, 128, 64),
    Rgb::new(128, 255, 128),
    Rgb::new(255, 0, 0),
    Rgb::new(128, 128, 0),
    Rgb::new(0, 255, 0),
];

/// Packed RGB bytes of a pixel slice
pub fn rgb_bytes(pixels: &[Rgb]) -> Vec<u8> {
    pixels.iter().flat_map(|p| p.to_bytes()).collect()
}
