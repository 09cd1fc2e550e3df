//! Icon rasterization and output
//!
//! `renderer` sizes and places the glyph, `canvas` holds the pixels and
//! `sink` encodes them as PNG.

pub mod canvas;
pub mod renderer;
pub mod sink;

pub use renderer::IconRenderer;
pub use sink::{ImageSink, PngFileSink};
