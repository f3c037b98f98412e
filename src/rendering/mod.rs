pub mod png_writer;
pub mod terminal;

pub use png_writer::{encode_png, write_png};
pub use terminal::RenderMode;
