use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::common::HexColor;
use crate::constants::defaults;

/// Drop shadow drawn beneath the glyph on larger icons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadowTokens {
    /// Shadow color; its alpha scales glyph coverage
    pub color: HexColor,
    /// Icons below this edge length get no shadow
    pub min_size: u32,
    pub offset_divisor: u32,
}

impl ShadowTokens {
    pub fn applies_to(&self, px: u32) -> bool {
        px >= self.min_size
    }

    /// Diagonal shadow offset in pixels, never less than one
    pub fn offset_for(&self, px: u32) -> i32 {
        (px / self.offset_divisor.max(1)).max(1) as i32
    }
}

impl Default for ShadowTokens {
    fn default() -> Self {
        Self {
            color: HexColor::parse(defaults::shadow::COLOR).unwrap_or(HexColor::from_rgb(180, 140, 80)),
            min_size: defaults::shadow::MIN_SIZE,
            offset_divisor: defaults::shadow::OFFSET_DIVISOR,
        }
    }
}

/// Everything that defines how an icon looks.
///
/// Every field has a default, so a token file only needs the fields it
/// overrides. `"shadow": null` disables the shadow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignTokens {
    pub background: HexColor,
    pub foreground: HexColor,
    /// Fraction of the edge kept clear on each side, in `[0, 0.5)`
    pub padding: f64,
    pub glyph: String,
    pub shadow: Option<ShadowTokens>,
    /// Font files or fontconfig family names, tried in order
    pub font_candidates: Vec<String>,
}

impl Default for DesignTokens {
    fn default() -> Self {
        Self {
            background: HexColor::parse(defaults::BACKGROUND).unwrap_or(HexColor::from_rgb(8, 8, 8)),
            foreground: HexColor::parse(defaults::FOREGROUND)
                .unwrap_or(HexColor::from_rgb(240, 234, 218)),
            padding: defaults::PADDING,
            glyph: defaults::GLYPH.to_string(),
            shadow: Some(ShadowTokens::default()),
            font_candidates: defaults::FONT_CANDIDATES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl DesignTokens {
    /// Per-user token file location (`<config_dir>/glyph-icons/tokens.json`)
    pub fn default_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push(crate::constants::config::APP_DIR);
        path.push(crate::constants::config::FILENAME);
        Some(path)
    }

    /// Load tokens from `explicit`, else from the per-user file if present,
    /// else use the built-in defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                debug!("No token file found, using built-in design tokens");
                Ok(Self::default())
            }
        }
    }

    /// Read and validate a JSON token file
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read design tokens from {:?}", path))?;

        let tokens: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON from {:?}", path))?;

        tokens
            .validate()
            .with_context(|| format!("Invalid design tokens in {:?}", path))?;

        info!(path = %path.display(), "Loaded design tokens");
        Ok(tokens)
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..0.5).contains(&self.padding) {
            bail!("padding must be in [0, 0.5), got {}", self.padding);
        }
        if self.glyph.trim().is_empty() {
            bail!("glyph must not be empty");
        }
        if let Some(shadow) = &self.shadow
            && shadow.offset_divisor == 0
        {
            bail!("shadow.offset_divisor must be at least 1");
        }
        Ok(())
    }

    /// Edge length of the square the glyph must fit in
    pub fn target_extent(&self, px: u32) -> f64 {
        px as f64 * (1.0 - self.padding * 2.0)
    }

    /// Shadow settings if a shadow should be drawn at `px`
    pub fn shadow_for(&self, px: u32) -> Option<&ShadowTokens> {
        self.shadow.as_ref().filter(|shadow| shadow.applies_to(px))
    }
}
