//! Glyph layout and rasterization (fontdue + built-in bitmap fallback)

use anyhow::{Context, Result, anyhow};
use fontdue::{Font, FontSettings};
use std::fs;
use std::path::Path;
use tracing::debug;

use super::builtin;
use crate::common::types::{InkBounds, Position};
use crate::constants::builtin::{ADVANCE, GLYPH_HEIGHT};

/// A loaded font face, independent of size
#[derive(Debug)]
pub enum FontFace {
    Fontdue { font: Font, font_name: String },
    /// Unscaled bitmap font used when nothing else loads
    Builtin,
}

impl FontFace {
    /// Load a TrueType/OpenType font from a file path
    pub fn from_path(path: &Path, font_name: String) -> Result<Self> {
        let font_data = fs::read(path)
            .with_context(|| format!("Failed to read font file: {}", path.display()))?;

        let font = Font::from_bytes(font_data, FontSettings::default()).map_err(|e| {
            anyhow!(
                "Failed to parse font file '{}': {}. Font may be corrupt or in an unsupported format.",
                path.display(),
                e
            )
        })?;

        debug!(path = %path.display(), font = %font_name, "Loaded font");
        Ok(Self::Fontdue { font, font_name })
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Fontdue { font_name, .. } => font_name,
            Self::Builtin => "built-in 5x7",
        }
    }

    pub fn is_scalable(&self) -> bool {
        matches!(self, Self::Fontdue { .. })
    }

    /// View of this face at a pixel size
    pub fn at_size(&self, size: u32) -> SizedFont<'_> {
        SizedFont { face: self, size }
    }
}

/// One rasterized glyph positioned relative to the run's pen origin
#[derive(Debug, Clone, PartialEq)]
pub struct RasterGlyph {
    /// Top-left of the coverage bitmap; y is negative above the baseline
    pub origin: Position,
    pub width: usize,
    pub height: usize,
    /// Row-major coverage, 0 (none) to 255 (full)
    pub coverage: Vec<u8>,
}

impl RasterGlyph {
    fn bounds(&self) -> InkBounds {
        InkBounds::new(
            self.origin.x,
            self.origin.y,
            self.origin.x + self.width as i32,
            self.origin.y + self.height as i32,
        )
    }
}

/// A laid-out string: glyph bitmaps plus their combined ink bounds
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphRun {
    pub glyphs: Vec<RasterGlyph>,
    pub bounds: InkBounds,
}

/// A font face at a specific pixel size
#[derive(Debug, Clone, Copy)]
pub struct SizedFont<'a> {
    face: &'a FontFace,
    size: u32,
}

impl SizedFont<'_> {
    /// Requested size; the built-in face ignores it when rasterizing
    #[cfg(test)]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Lay out `text` on a single line starting at pen origin (0, 0)
    pub fn layout(&self, text: &str) -> GlyphRun {
        let mut glyphs = Vec::new();
        let mut pen_x = 0.0f32;

        for ch in text.chars() {
            let advance = match self.face {
                FontFace::Fontdue { font, .. } => {
                    let (metrics, coverage) = font.rasterize(ch, self.size as f32);
                    if metrics.width > 0 && metrics.height > 0 {
                        glyphs.push(RasterGlyph {
                            origin: Position::new(
                                pen_x as i32 + metrics.xmin,
                                -(metrics.ymin + metrics.height as i32),
                            ),
                            width: metrics.width,
                            height: metrics.height,
                            coverage,
                        });
                    }
                    metrics.advance_width
                }
                FontFace::Builtin => {
                    if let Some((left, top, width, height, coverage)) = builtin::rasterize(ch) {
                        glyphs.push(RasterGlyph {
                            origin: Position::new(
                                pen_x as i32 + left,
                                top - GLYPH_HEIGHT as i32,
                            ),
                            width,
                            height,
                            coverage,
                        });
                    }
                    ADVANCE
                }
            };
            pen_x += advance;
        }

        let bounds = glyphs
            .iter()
            .map(RasterGlyph::bounds)
            .fold(InkBounds::default(), InkBounds::union);

        GlyphRun { glyphs, bounds }
    }

    /// Ink bounds of `text` without keeping the bitmaps around
    pub fn measure(&self, text: &str) -> InkBounds {
        self.layout(text).bounds
    }
}
