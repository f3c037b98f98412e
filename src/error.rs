use std::path::PathBuf;

use pencil_quantize::{PaletteError, SketchError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Failed to read image {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode PNG {path}: {message}")]
    Decode { path: PathBuf, message: String },

    #[error("Unsupported pixel layout in {path}: {layout}")]
    UnsupportedLayout { path: PathBuf, layout: String },

    #[error("Invalid image {path}: {message}")]
    Invalid { path: PathBuf, message: String },
}

#[derive(Debug, Error)]
pub enum PaletteFileError {
    #[error("Failed to read palette {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid palette {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: PaletteError,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid config value for {field}: {value}")]
    InvalidValue { field: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Sketch error: {0}{hint}", hint = kernel_hint(.0))]
    Sketch(#[from] SketchError),

    #[error("Invalid scale {0} (must be at least 1)")]
    InvalidScale(u32),

    #[error("Image too large: {width}x{height} at scale {scale}")]
    TooLarge { width: u32, height: u32, scale: u32 },

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn kernel_hint(err: &SketchError) -> &'static str {
    if err.is_not_implemented() {
        " (choose another kernel, e.g. --kernel bilinear)"
    } else {
        ""
    }
}
