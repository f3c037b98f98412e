//! 8-bit RGB reference color
//!
//! `Rgb` is the value type shared by pixel buffers and palette entries.
//! Channels are used exactly as stored: no gamma decoding happens anywhere
//! in the crate.

use std::fmt;
use std::str::FromStr;

use crate::palette::ParseColorError;

/// A color with three 8-bit channels.
///
/// Colors are compared purely by value. A packed form (`0xAARRGGBB`) is
/// accepted for palette files written as ARGB integers; the alpha byte is
/// ignored on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    ///
    /// # Example
    /// ```
    /// use pencil_quantize::Rgb;
    /// let orange = Rgb::new(255, 128, 0);
    /// assert_eq!(orange.g, 128);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Unpack a `0xAARRGGBB` integer. The alpha byte is ignored.
    ///
    /// # Example
    /// ```
    /// use pencil_quantize::Rgb;
    /// assert_eq!(Rgb::from_packed(0xFF10_2030), Rgb::new(0x10, 0x20, 0x30));
    /// ```
    #[inline]
    pub const fn from_packed(argb: u32) -> Self {
        Self {
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Pack into `0x00RRGGBB`.
    #[inline]
    pub const fn to_packed(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(bytes: [u8; 3]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    /// Parse a hexadecimal color token.
    ///
    /// The token is read as a packed ARGB integer: `#`, `0x` and `0X`
    /// prefixes are optional, between 1 and 8 hex digits are accepted, and
    /// any alpha byte is dropped. `"ff8000"`, `"#ff8000"` and `"0xffff8000"`
    /// all parse to the same color.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('#')
            .or_else(|| s.strip_prefix("0x"))
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if digits.is_empty() || digits.len() > 8 {
            return Err(ParseColorError::InvalidLength {
                token: s.to_string(),
            });
        }
        let mut argb = 0u32;
        for c in digits.chars() {
            let digit = c.to_digit(16).ok_or_else(|| ParseColorError::InvalidDigit {
                token: s.to_string(),
                digit: c,
            })?;
            argb = (argb << 4) | digit;
        }
        Ok(Self::from_packed(argb))
    }
}
