pub mod image_loader;
pub mod palette_loader;

pub use image_loader::load_png;
pub use palette_loader::load_palette;
