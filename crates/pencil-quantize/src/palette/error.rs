//! Error types for palette operations
//!
//! This module provides error types for color parsing and palette validation.

use std::fmt;

/// Error type for parsing hex color tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseColorError {
    /// Token is empty or has more than 8 hex digits after its prefix
    InvalidLength {
        /// The offending token
        token: String,
    },
    /// Token contains a character that is not a hexadecimal digit
    InvalidDigit {
        /// The offending token
        token: String,
        /// First invalid character
        digit: char,
    },
}

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseColorError::InvalidLength { token } => {
                write!(
                    f,
                    "invalid color value {:?} (expected 1 to 8 hex digits)",
                    token
                )
            }
            ParseColorError::InvalidDigit { token, digit } => {
                write!(f, "invalid color value {:?}: {:?} is not a hex digit", token, digit)
            }
        }
    }
}

impl std::error::Error for ParseColorError {}

/// Error type for palette construction and parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteError {
    /// No entries provided
    EmptyPalette,
    /// An entry name is empty or only whitespace
    EmptyName,
    /// A palette definition line does not have the `name heavy light` shape
    Syntax {
        /// 1-based line number
        line: usize,
        /// What was wrong with the line
        message: String,
    },
    /// A color token on a palette definition line is malformed
    ParseColor {
        /// 1-based line number
        line: usize,
        /// The color parse failure
        source: ParseColorError,
    },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaletteError::EmptyPalette => write!(f, "palette cannot be empty"),
            PaletteError::EmptyName => write!(f, "palette entry name cannot be empty"),
            PaletteError::Syntax { line, message } => write!(f, "line {}: {}", line, message),
            PaletteError::ParseColor { line, source } => write!(f, "line {}: {}", line, source),
        }
    }
}

impl std::error::Error for PaletteError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PaletteError::ParseColor { source, .. } => Some(source),
            _ => None,
        }
    }
}
