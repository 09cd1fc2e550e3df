//! Configuration management
//!
//! Design tokens (colors, padding, glyph, shadow, font candidates) with
//! built-in defaults and optional JSON overrides.

pub mod tokens;

pub use tokens::DesignTokens;
