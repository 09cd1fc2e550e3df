//! PNG output
//!
//! Icons are encoded as 8-bit RGB PNGs. Writers do not create directories
//! unless asked to; a missing destination is an error for the caller.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

use super::canvas::Canvas;

/// Destination for finished icons
pub trait ImageSink {
    /// Persist `canvas` at `path`
    fn write(&mut self, canvas: &Canvas, path: &Path) -> Result<()>;
}

/// Writes PNG files to the filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct PngFileSink {
    /// Create missing parent directories instead of failing
    pub create_dirs: bool,
}

impl PngFileSink {
    pub fn new(create_dirs: bool) -> Self {
        Self { create_dirs }
    }
}

impl ImageSink for PngFileSink {
    fn write(&mut self, canvas: &Canvas, path: &Path) -> Result<()> {
        if self.create_dirs
            && let Some(parent) = path.parent()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {:?}", parent))?;
        }

        let file =
            File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
        let mut writer = BufWriter::new(file);
        encode_into(canvas, &mut writer).with_context(|| format!("Failed to encode {:?}", path))?;
        writer
            .flush()
            .with_context(|| format!("Failed to write {:?}", path))?;

        debug!(path = %path.display(), size = canvas.size(), "Wrote PNG");
        Ok(())
    }
}

fn encode_into<W: Write>(canvas: &Canvas, writer: W) -> Result<()> {
    let mut encoder = png::Encoder::new(writer, canvas.size(), canvas.size());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder.write_header().context("Failed to write PNG header")?;
    png_writer
        .write_image_data(canvas.data())
        .context("Failed to write PNG image data")?;
    png_writer.finish().context("Failed to finish PNG stream")?;
    Ok(())
}

/// Encode a canvas to PNG bytes in memory
#[cfg(test)]
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    encode_into(canvas, &mut bytes)?;
    Ok(bytes)
}
