//! Scratch directory with helpers for writing test inputs.

use std::path::PathBuf;

use tempfile::TempDir;

/// Temporary directory that is removed when dropped
pub struct TestWorkspace {
    dir: TempDir,
}

impl TestWorkspace {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Path of `name` inside the workspace
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a text file and return its path
    pub fn write_text(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, content).expect("Failed to write text file");
        path
    }

    /// Write an 8-bit PNG of the given color type and return its path
    pub fn write_png(
        &self,
        name: &str,
        width: u32,
        height: u32,
        color_type: png::ColorType,
        data: &[u8],
    ) -> PathBuf {
        let path = self.path(name);
        let file = std::fs::File::create(&path).expect("Failed to create PNG");
        let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("Failed to write PNG header");
        writer
            .write_image_data(data)
            .expect("Failed to write PNG data");
        path
    }

    /// Write an RGB8 PNG and return its path
    pub fn write_rgb_png(&self, name: &str, width: u32, height: u32, data: &[u8]) -> PathBuf {
        self.write_png(name, width, height, png::ColorType::Rgb, data)
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
