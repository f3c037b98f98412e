//! Pencel - pencil sketches from a two-tone material palette
//!
//! Decodes PNG images, shrinks them onto a small grid and prints every cell
//! in the closest palette color. The quantization core lives in the
//! `pencil-quantize` crate; this library holds the glue and is exposed for
//! integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
