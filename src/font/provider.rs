//! Ordered font fallback
//!
//! Candidates are tried in order; the first one that exists and parses as a
//! scalable font is kept for the provider's lifetime. Failures are logged and
//! skipped, and exhausting the list degrades to the built-in bitmap font.

use anyhow::{Result, bail};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::discovery::find_font_path;
use super::rendering::{FontFace, SizedFont};

const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc"];

/// One entry of the fallback list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontCandidate {
    /// A font file on disk
    File(PathBuf),
    /// A family name (optionally with style) resolved via fontconfig
    Family(String),
}

impl FontCandidate {
    /// Anything that looks like a path (separator or font extension) is a
    /// file, everything else is a family name.
    pub fn parse(candidate: &str) -> Self {
        let has_separator = candidate.contains('/') || candidate.contains('\\');
        let has_font_extension = Path::new(candidate)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| FONT_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)));

        if has_separator || has_font_extension {
            Self::File(PathBuf::from(candidate))
        } else {
            Self::Family(candidate.to_string())
        }
    }

    fn load(&self) -> Result<FontFace> {
        match self {
            Self::File(path) => {
                if !path.exists() {
                    bail!("Font file '{}' does not exist", path.display());
                }
                let name = path
                    .file_stem()
                    .map(|stem| stem.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                FontFace::from_path(path, name)
            }
            Self::Family(name) => {
                let path = find_font_path(name)?;
                FontFace::from_path(&path, name.clone())
            }
        }
    }
}

/// Resolves the fallback list once and hands out sized views of the winner
#[derive(Debug)]
pub struct FontProvider {
    face: FontFace,
}

impl FontProvider {
    /// Pick the first loadable candidate, or the built-in font.
    /// Never fails: a missing font is a quality issue, not an error.
    pub fn resolve<S: AsRef<str>>(candidates: &[S]) -> Self {
        for candidate in candidates.iter().map(|c| FontCandidate::parse(c.as_ref())) {
            match candidate.load() {
                Ok(face) => {
                    info!(font = face.name(), "Selected font");
                    return Self { face };
                }
                Err(e) => {
                    debug!(candidate = ?candidate, error = %e, "Font candidate unavailable");
                }
            }
        }

        warn!(
            tried = candidates.len(),
            "No scalable font available, falling back to built-in bitmap font"
        );
        Self::builtin()
    }

    /// Provider backed only by the built-in bitmap font
    pub fn builtin() -> Self {
        Self {
            face: FontFace::Builtin,
        }
    }

    pub fn face(&self) -> &FontFace {
        &self.face
    }

    /// The resolved face at `size` pixels
    pub fn load(&self, size: u32) -> SizedFont<'_> {
        self.face.at_size(size)
    }
}
