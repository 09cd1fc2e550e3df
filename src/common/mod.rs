//! Shared building blocks used by the font, icon and config modules

pub mod color;
pub mod types;

pub use color::HexColor;
