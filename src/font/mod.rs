//! Font rendering and discovery
//!
//! Scalable fonts are rasterized with fontdue and located through fontconfig
//! or explicit file paths; a built-in bitmap font covers machines without any.

pub mod builtin;
pub mod discovery;
pub mod provider;
pub mod rendering;

pub use discovery::list_fonts;
pub use provider::FontProvider;
pub use rendering::GlyphRun;
