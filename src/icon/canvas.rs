//! Square RGB8 pixel buffer

use crate::common::color::blend_channel;
use crate::common::types::Position;
use crate::common::HexColor;
use crate::font::GlyphRun;

const CHANNELS: usize = 3;

/// A `size × size` RGB image, row-major, 8 bits per channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    size: u32,
    data: Vec<u8>,
}

impl Canvas {
    /// Canvas of edge `size` filled with the opaque part of `color`
    pub fn filled(size: u32, color: HexColor) -> Self {
        let pixel = color.rgb();
        let pixels = size as usize * size as usize;
        let mut data = Vec::with_capacity(pixels * CHANNELS);
        for _ in 0..pixels {
            data.extend_from_slice(&pixel);
        }
        Self { size, data }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.size || y >= self.size {
            return None;
        }
        let idx = (y as usize * self.size as usize + x as usize) * CHANNELS;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// Paint a glyph run with its pen origin at `origin`.
    ///
    /// Coverage (scaled by the color's alpha) blends the color over the
    /// existing pixels; anything outside the canvas is clipped.
    pub fn draw_run(&mut self, run: &GlyphRun, origin: Position, color: HexColor) {
        let rgb = color.rgb();
        let alpha = color.alpha() as u32;
        let size = self.size as i32;

        for glyph in &run.glyphs {
            for gy in 0..glyph.height {
                let py = origin.y + glyph.origin.y + gy as i32;
                if py < 0 || py >= size {
                    continue;
                }
                for gx in 0..glyph.width {
                    let px = origin.x + glyph.origin.x + gx as i32;
                    if px < 0 || px >= size {
                        continue;
                    }

                    let coverage = glyph.coverage[gy * glyph.width + gx] as u32 * alpha / 255;
                    if coverage == 0 {
                        continue;
                    }

                    let idx = (py as usize * self.size as usize + px as usize) * CHANNELS;
                    for (channel, &src) in rgb.iter().enumerate() {
                        self.data[idx + channel] = blend_channel(self.data[idx + channel], src, coverage);
                    }
                }
            }
        }
    }
}
